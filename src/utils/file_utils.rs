/// File handling utilities
///
/// This module provides utility functions for reading newline-separated
/// lists of strings from input files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

/// Error raised when an input file cannot be used
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The path does not exist
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is a directory or other non-file
    #[error("Input path is not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Options controlling how lines become strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Strip leading and trailing whitespace from each line
    #[serde(default = "default_true")]
    pub trim_lines: bool,

    /// Drop empty lines instead of keeping them as empty strings
    #[serde(default)]
    pub skip_blank_lines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            trim_lines: true,
            skip_blank_lines: false,
        }
    }
}

/// Split text into one string per line.
///
/// A final trailing newline does not produce an extra empty entry, but blank
/// lines elsewhere are kept as empty strings unless `skip_blank_lines` is set.
pub fn parse_lines(content: &str, options: &InputOptions) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            if options.trim_lines {
                line.trim()
            } else {
                // `lines` already removes "\n" and "\r\n"
                line
            }
        })
        .filter(|line| !(options.skip_blank_lines && line.is_empty()))
        .map(str::to_string)
        .collect()
}

/// Read a newline-separated list of strings from a file.
///
/// # Arguments
///
/// * `file_path` - Path to the file
/// * `options` - Line handling options
///
/// # Returns
///
/// The strings in file order, or an [`InputError`] if the file is missing or unreadable
pub fn read_lines(file_path: &Path, options: &InputOptions) -> Result<Vec<String>, InputError> {
    if !file_path.exists() {
        return Err(InputError::NotFound {
            path: file_path.to_path_buf(),
        });
    }

    if !file_path.is_file() {
        return Err(InputError::NotAFile {
            path: file_path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(file_path).map_err(|source| InputError::Unreadable {
        path: file_path.to_path_buf(),
        source,
    })?;

    let lines = parse_lines(&content, options);
    debug!("Read {} lines from {}", lines.len(), file_path.display());

    Ok(lines)
}
