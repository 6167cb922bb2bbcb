/// Batch anagram matcher
///
/// Matches every distinct key against every distinct candidate and collects,
/// per key, the candidates that share its signature.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::signature::Signature;

/// Key -> set of candidates that are anagrams of it
pub type AnagramMap = BTreeMap<String, BTreeSet<String>>;

/// Options controlling how keys and candidates are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Compare strings as given instead of lower-casing them first
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Lower-case a string one character at a time.
///
/// Unlike `str::to_lowercase` this ignores context: 'Σ' always becomes 'σ',
/// never the word-final 'ς', so permutations fold to permutations.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Case-fold (unless `case_sensitive`) and deduplicate a list of strings.
pub fn normalize<I, S>(items: I, options: &MatchOptions) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| {
            if options.case_sensitive {
                s.as_ref().to_string()
            } else {
                fold_case(s.as_ref())
            }
        })
        .collect()
}

/// Find all anagrams of `keys` among `candidates`, ignoring case.
///
/// Duplicates are collapsed in both lists. Every distinct key appears in the
/// result, with an empty set when nothing matches.
///
/// # Arguments
///
/// * `keys` - Strings to look for anagrams of
/// * `candidates` - Strings to test against the keys
///
/// # Returns
///
/// Mapping of lower-cased key to its lower-cased anagrams
pub fn find_anagrams<K, C, S, T>(keys: K, candidates: C) -> AnagramMap
where
    K: IntoIterator<Item = S>,
    C: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    find_anagrams_with(keys, candidates, &MatchOptions::default())
}

/// Same as [`find_anagrams`] with explicit matching options
pub fn find_anagrams_with<K, C, S, T>(keys: K, candidates: C, options: &MatchOptions) -> AnagramMap
where
    K: IntoIterator<Item = S>,
    C: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let keys = normalize(keys, options);
    let candidates = normalize(candidates, options);
    match_normalized(&keys, &candidates)
}

/// Match already normalized keys and candidates. Case-sensitive.
pub fn match_normalized(keys: &BTreeSet<String>, candidates: &BTreeSet<String>) -> AnagramMap {
    // Signatures for keys are computed once up front
    let key_signatures: Vec<(&String, Signature)> =
        keys.iter().map(|k| (k, Signature::of(k))).collect();

    let mut results: AnagramMap = keys.iter().map(|k| (k.clone(), BTreeSet::new())).collect();

    if key_signatures.is_empty() {
        return results;
    }

    for candidate in candidates {
        let candidate_signature = Signature::of(candidate);

        for (key, key_signature) in &key_signatures {
            if key_signature.len() != candidate_signature.len() {
                continue;
            }

            if *key_signature == candidate_signature {
                if let Some(set) = results.get_mut(*key) {
                    set.insert(candidate.clone());
                }
            }
        }
    }

    debug!(
        "Matched {} keys against {} candidates",
        keys.len(),
        candidates.len()
    );

    results
}

/// Total number of (key, anagram) pairs in a result mapping
pub fn total_matches(results: &AnagramMap) -> usize {
    results.values().map(|v| v.len()).sum()
}
