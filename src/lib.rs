/// Anagram Finder - find anagrams of a list of keys in a list of candidates
///
/// This library reads newline-separated lists of keys and candidate strings
/// and reports, for every key, which candidates are anagrams of it. Matching
/// ignores case by default.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::finder::{AnagramFinder, AnagramReport};
pub use crate::core::matcher::{find_anagrams, find_anagrams_with, AnagramMap, MatchOptions};
pub use crate::core::signature::{char_counts, is_anagram, Signature};
pub use crate::utils::file_utils::{InputError, InputOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Find anagrams of the keys in one file among the candidates in another
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `keys_path` - File with one key per line
/// * `candidates_path` - File with one candidate per line
///
/// # Returns
///
/// Mapping of each distinct (lower-cased) key to its anagrams
pub fn find_anagrams_in_files<P: AsRef<std::path::Path>, Q: AsRef<std::path::Path>>(
    keys_path: P,
    candidates_path: Q,
) -> anyhow::Result<AnagramMap> {
    let finder = AnagramFinder::new(config::default_config());
    let report = finder.find_in_files(keys_path.as_ref(), candidates_path.as_ref())?;
    Ok(report.results)
}

/// Library configuration
pub mod config {
    use std::path::Path;

    use log::{error, info};
    use serde::{Deserialize, Serialize};

    use crate::core::matcher::MatchOptions;
    use crate::utils::file_utils::InputOptions;

    /// Settings read from a JSON configuration file
    ///
    /// All fields are optional in the file; missing ones take their defaults.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Config {
        #[serde(flatten)]
        pub matching: MatchOptions,

        #[serde(flatten)]
        pub input: InputOptions,

        /// Log level name, overridden by `--log-level`
        #[serde(default)]
        pub log_level: Option<String>,
    }

    /// Create default configuration
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Load configuration from a JSON file.
    ///
    /// A missing or invalid file is logged and the defaults are used instead.
    pub fn load_config(config_path: Option<&Path>) -> Config {
        let Some(path) = config_path else {
            return default_config();
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return default_config();
        }

        match std::fs::read_to_string(path) {
            Ok(config_str) => match serde_json::from_str(&config_str) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    error!("Invalid JSON in configuration file: {}", e);
                    default_config()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                default_config()
            }
        }
    }

}
