//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use dinsort_core::canonicalize;
use std::io::Write;

/// Which form of each line the text formatter writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// The line as read
    Original,
    /// The canonical form of the line
    Canonical,
}

/// Plain text formatter - outputs one entry per line
pub struct TextFormatter<W: Write> {
    writer: W,
    field: TextField,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, field: TextField) -> Self {
        Self { writer, field }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &str) -> Result<()> {
        match self.field {
            TextField::Original => writeln!(self.writer, "{line}")?,
            TextField::Canonical => writeln!(self.writer, "{}", canonicalize(line))?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
