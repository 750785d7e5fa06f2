//! Sort command implementation

use crate::config::CliConfig;
use crate::input;
use crate::output::{self, OutputFormat, TextField};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted or "-"
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reverse the sort order
    #[arg(short, long)]
    pub reverse: bool,

    /// Drop repeated identical lines
    #[arg(short, long)]
    pub unique: bool,

    /// Case ordering by name: "honored" or "legacy" (overrides the config file)
    #[arg(long, value_name = "NAME")]
    pub case_ordering: Option<String>,

    /// Discard the case-sensitive level; case variants fall back to binary order
    #[arg(long)]
    pub legacy_case_order: bool,

    /// Sort on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DINSORT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::resolve(self.config.as_deref())?;
        let collator = super::build_collator(
            config.collation,
            self.case_ordering.as_deref(),
            self.legacy_case_order,
        )?;

        let mut lines = input::read_lines(&self.input)?;
        log::info!("Sorting {} lines", lines.len());

        if self.parallel {
            collator.par_sort(&mut lines);
        } else {
            collator.sort(&mut lines);
        }
        if self.unique {
            lines.dedup();
        }
        if self.reverse {
            lines.reverse();
        }

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = output::open_output(self.output.as_deref())?;
        let mut formatter =
            output::create_formatter(format, TextField::Original, config.output.pretty_json, writer);
        for line in &lines {
            formatter.format_line(line)?;
        }
        formatter.finish()
    }
}
