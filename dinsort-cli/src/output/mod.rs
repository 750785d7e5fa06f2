//! Output formatting module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single line
    fn format_line(&mut self, line: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::{TextField, TextFormatter};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one line per entry
    Text,
    /// JSON array of entries with their canonical form
    Json,
}

/// Open the output destination: a file, or stdout when `None`
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for a format
pub fn create_formatter(
    format: OutputFormat,
    field: TextField,
    pretty_json: bool,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, field)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
