//! Collator configuration

use crate::error::{CollationError, Result};
use std::fmt;
use std::str::FromStr;

/// How the case-sensitive comparison level affects the final verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaseOrdering {
    /// Strings equal apart from case are ordered upper case first
    #[default]
    Honored,
    /// The case-sensitive verdict is computed and discarded; only the
    /// binary tie-break separates case variants
    Legacy,
}

impl CaseOrdering {
    /// Configuration name of this ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseOrdering::Honored => "honored",
            CaseOrdering::Legacy => "legacy",
        }
    }
}

impl fmt::Display for CaseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseOrdering {
    type Err = CollationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "honored" | "honoured" => Ok(CaseOrdering::Honored),
            "legacy" => Ok(CaseOrdering::Legacy),
            other => Err(CollationError::InvalidCaseOrdering(other.to_string())),
        }
    }
}

/// Collator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollatorConfig {
    /// Effect of the case-sensitive level
    pub case_ordering: CaseOrdering,
}

impl CollatorConfig {
    /// Configuration reproducing the discarded case-sensitive level
    pub fn legacy() -> Self {
        Self {
            case_ordering: CaseOrdering::Legacy,
        }
    }

    /// Create a builder
    pub fn builder() -> CollatorConfigBuilder {
        CollatorConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct CollatorConfigBuilder {
    config: CollatorConfig,
}

impl CollatorConfigBuilder {
    /// Set the case ordering
    pub fn case_ordering(mut self, case_ordering: CaseOrdering) -> Self {
        self.config.case_ordering = case_ordering;
        self
    }

    /// Set the case ordering by name
    pub fn case_ordering_name(self, name: &str) -> Result<Self> {
        Ok(self.case_ordering(name.parse()?))
    }

    /// Build the configuration
    pub fn build(self) -> CollatorConfig {
        self.config
    }
}
