/// Utility modules for anagram finder
///
/// This module contains utility functions for reading input files and
/// formatting or exporting results.

pub mod file_utils;
pub mod output_formatter;
