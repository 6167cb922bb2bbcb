/// Anagram finder
///
/// Coordinates reading the key and candidate files, running the matcher and
/// collecting statistics about the run.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use crate::config::Config;
use crate::core::matcher::{self, AnagramMap};
use crate::utils::file_utils::read_lines;

/// Result of one anagram search together with run statistics
#[derive(Debug, Clone, Serialize)]
pub struct AnagramReport {
    /// Key -> anagrams found among the candidates
    pub results: AnagramMap,

    /// Keys read from input, duplicates included
    pub keys_read: usize,

    /// Candidates read from input, duplicates included
    pub candidates_read: usize,

    /// Distinct candidates after normalization
    pub distinct_candidates: usize,

    /// Time spent matching
    #[serde(skip)]
    pub elapsed: Duration,
}

impl AnagramReport {
    /// Distinct keys after normalization
    pub fn distinct_keys(&self) -> usize {
        self.results.len()
    }

    /// Total number of (key, anagram) pairs
    pub fn total_matches(&self) -> usize {
        matcher::total_matches(&self.results)
    }

    /// Number of keys with at least one anagram
    pub fn keys_with_matches(&self) -> usize {
        self.results.values().filter(|v| !v.is_empty()).count()
    }
}

/// Finds anagrams using a fixed configuration
pub struct AnagramFinder {
    /// Matching and input options
    config: Config,
}

impl AnagramFinder {
    /// Create a new AnagramFinder instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read keys and candidates from files and find all anagrams
    ///
    /// # Arguments
    ///
    /// * `keys_path` - File with one key per line
    /// * `candidates_path` - File with one candidate per line
    ///
    /// # Returns
    ///
    /// The report, or an error if either file cannot be read
    pub fn find_in_files(&self, keys_path: &Path, candidates_path: &Path) -> Result<AnagramReport> {
        info!("Reading keys from {}", keys_path.display());
        let keys = read_lines(keys_path, &self.config.input)?;

        info!("Reading candidates from {}", candidates_path.display());
        let candidates = read_lines(candidates_path, &self.config.input)?;

        Ok(self.find(&keys, &candidates))
    }

    /// Find all anagrams of in-memory keys among in-memory candidates
    pub fn find<S, T>(&self, keys: &[S], candidates: &[T]) -> AnagramReport
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let start_time = Instant::now();

        let options = &self.config.matching;
        let distinct_keys = matcher::normalize(keys, options);
        let distinct_candidates = matcher::normalize(candidates, options);
        debug!(
            "{} distinct keys, {} distinct candidates",
            distinct_keys.len(),
            distinct_candidates.len()
        );

        let results = matcher::match_normalized(&distinct_keys, &distinct_candidates);

        let report = AnagramReport {
            results,
            keys_read: keys.len(),
            candidates_read: candidates.len(),
            distinct_candidates: distinct_candidates.len(),
            elapsed: start_time.elapsed(),
        };

        info!(
            "Found {} anagrams for {} keys in {:?}",
            report.total_matches(),
            report.distinct_keys(),
            report.elapsed
        );

        report
    }
}
