//! Compare command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use dinsort_core::Verdict;
use std::cmp::Ordering;
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First string
    pub left: String,

    /// Second string
    pub right: String,

    /// Case ordering by name: "honored" or "legacy" (overrides the config file)
    #[arg(long, value_name = "NAME")]
    pub case_ordering: Option<String>,

    /// Discard the case-sensitive level; case variants fall back to binary order
    #[arg(long)]
    pub legacy_case_order: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DINSORT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::resolve(self.config.as_deref())?;
        let collator = super::build_collator(
            config.collation,
            self.case_ordering.as_deref(),
            self.legacy_case_order,
        )?;

        let verdict = collator.explain(&self.left, &self.right);
        println!("{}", render(&verdict));
        Ok(())
    }
}

/// Render a verdict as `<symbol> (<level>)`
pub fn render(verdict: &Verdict) -> String {
    let symbol = match verdict.ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    format!("{symbol} ({})", verdict.level.as_str())
}
