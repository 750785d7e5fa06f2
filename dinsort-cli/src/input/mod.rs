//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// Marker for standard input among the input arguments
pub const STDIN: &str = "-";

/// Read the lines of every input, in argument order
///
/// No inputs read standard input. A `-` among the inputs reads standard
/// input at that position; it is consumed once, later `-` add nothing.
pub fn read_lines(inputs: &[String]) -> Result<Vec<String>> {
    if inputs.is_empty() {
        return read_stdin_lines();
    }

    let mut lines = Vec::new();
    let mut seen: Vec<PathBuf> = Vec::new();
    let mut stdin_consumed = false;

    for input in inputs {
        if input == STDIN {
            if !stdin_consumed {
                lines.extend(read_stdin_lines()?);
                stdin_consumed = true;
            }
            continue;
        }

        for path in resolve_patterns(std::slice::from_ref(input))? {
            if seen.contains(&path) {
                continue;
            }
            log::info!("Reading {}", path.display());
            lines.extend(FileReader::split_lines(&FileReader::read_text(&path)?));
            seen.push(path);
        }
    }
    Ok(lines)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    log::debug!("Reading standard input");
    Ok(FileReader::split_lines(&FileReader::read_stdin()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("1.txt");
        let second = temp_dir.path().join("2.txt");
        fs::write(&first, "b\na\n").unwrap();
        fs::write(&second, "c").unwrap();

        let lines = read_lines(&[
            second.display().to_string(),
            first.display().to_string(),
        ])
        .unwrap();
        assert_eq!(lines, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_read_lines_skips_files_matched_twice() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("1.txt");
        fs::write(&file, "a\n").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let lines = read_lines(&[file.display().to_string(), pattern]).unwrap();
        assert_eq!(lines, vec!["a"]);
    }
}
