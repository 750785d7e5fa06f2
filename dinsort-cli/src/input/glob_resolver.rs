//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to file paths, keeping the order of the patterns
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched: Vec<PathBuf> = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        // glob yields paths in alphabetical order within one pattern
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
