//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dinsort_core::canonicalize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs entries as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EntryData {
    /// The line as read
    pub text: String,
    /// Canonical form of the line
    pub canonical: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &str) -> Result<()> {
        self.entries.push(EntryData {
            text: line.to_string(),
            canonical: canonicalize(line),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_entries() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_line("Straße 007").unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(
            output,
            "[{\"text\":\"Straße 007\",\"canonical\":\"Strasse 07\"}]\n"
        );

        let parsed: Vec<EntryData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0].canonical, "Strasse 07");
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
