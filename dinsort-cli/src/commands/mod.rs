//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use crate::error::CliError;
use dinsort_core::{CaseOrdering, Collator, CollatorConfig};

pub mod canon;
pub mod compare;
pub mod generate_config;
pub mod sort;
pub mod tokens;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort lines in DIN 5007-2 order
    Sort(sort::SortArgs),

    /// Print the canonical form of each line
    Canon(canon::CanonArgs),

    /// Compare two strings and report the deciding level
    Compare(compare::CompareArgs),

    /// Show the token stream of a string
    Tokens(tokens::TokensArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Sort(args) => args.execute(),
            Commands::Canon(args) => args.execute(),
            Commands::Compare(args) => args.execute(),
            Commands::Tokens(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Build a collator from the loaded configuration and the command-line overrides
///
/// `--legacy-case-order` wins over `--case-ordering`, which wins over the
/// configuration file.
pub(crate) fn build_collator(
    config: CollatorConfig,
    case_ordering: Option<&str>,
    legacy_case_order: bool,
) -> Result<Collator> {
    let mut builder = CollatorConfig::builder().case_ordering(config.case_ordering);
    if let Some(name) = case_ordering {
        builder = builder
            .case_ordering_name(name)
            .map_err(CliError::Collation)?;
    }
    if legacy_case_order {
        builder = builder.case_ordering(CaseOrdering::Legacy);
    }

    let config = builder.build();
    log::debug!("Case ordering: {}", config.case_ordering);
    Ok(Collator::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinsort_core::CollationError;

    #[test]
    fn test_commands_debug_format() {
        let tokens_cmd = Commands::Tokens(tokens::TokensArgs {
            text: "Grüße".to_string(),
            insensitive: false,
        });

        let debug_str = format!("{:?}", tokens_cmd);
        assert!(debug_str.contains("Tokens"));
        assert!(debug_str.contains("Grüße"));
    }

    #[test]
    fn test_build_collator_overrides() {
        let collator = build_collator(CollatorConfig::default(), None, true).unwrap();
        assert_eq!(collator.config().case_ordering, CaseOrdering::Legacy);

        let collator = build_collator(CollatorConfig::legacy(), None, false).unwrap();
        assert_eq!(collator.config().case_ordering, CaseOrdering::Legacy);

        let collator = build_collator(CollatorConfig::default(), None, false).unwrap();
        assert_eq!(collator.config().case_ordering, CaseOrdering::Honored);

        let collator = build_collator(CollatorConfig::legacy(), Some("Honored"), false).unwrap();
        assert_eq!(collator.config().case_ordering, CaseOrdering::Honored);

        let collator = build_collator(CollatorConfig::default(), Some("honored"), true).unwrap();
        assert_eq!(collator.config().case_ordering, CaseOrdering::Legacy);
    }

    #[test]
    fn test_build_collator_rejects_unknown_case_ordering() {
        let error = build_collator(CollatorConfig::default(), Some("sideways"), false).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::Collation(CollationError::InvalidCaseOrdering(name))) if name == "sideways"
        ));
        assert_eq!(
            error.to_string(),
            "Collation error: unknown case ordering 'sideways' (expected 'honored' or 'legacy')"
        );
    }
}
