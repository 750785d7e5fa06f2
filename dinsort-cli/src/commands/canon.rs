//! Canon command implementation

use crate::config::CliConfig;
use crate::input;
use crate::output::{self, OutputFormat, TextField};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the canon command
#[derive(Debug, Args)]
pub struct CanonArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted or "-"
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DINSORT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl CanonArgs {
    /// Execute the canon command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::resolve(self.config.as_deref())?;
        let lines = input::read_lines(&self.input)?;
        log::info!("Canonicalizing {} lines", lines.len());

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = output::open_output(self.output.as_deref())?;
        let mut formatter =
            output::create_formatter(format, TextField::Canonical, config.output.pretty_json, writer);
        for line in &lines {
            formatter.format_line(line)?;
        }
        formatter.finish()
    }
}
