/// Character signatures
///
/// A signature is the multiset of characters in a string. Two strings are
/// anagrams of each other exactly when their signatures are equal.

use std::collections::HashMap;

/// Character-frequency signature of a string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    /// Occurrence count for each distinct character
    counts: HashMap<char, usize>,

    /// Total number of characters (sum of all counts)
    len: usize,
}

impl Signature {
    /// Compute the signature of a string
    pub fn of(text: &str) -> Self {
        let mut counts = HashMap::new();
        let mut len = 0;

        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
            len += 1;
        }

        Self { counts, len }
    }

    /// Number of characters in the string this signature was built from
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Self::of(text)
    }
}

impl From<HashMap<char, usize>> for Signature {
    fn from(counts: HashMap<char, usize>) -> Self {
        // Zero entries would make otherwise equal signatures compare unequal
        let counts: HashMap<char, usize> = counts.into_iter().filter(|(_, n)| *n > 0).collect();
        let len = counts.values().sum();
        Self { counts, len }
    }
}

/// Returns a map of character to count for each character in `text`.
///
/// The empty string yields an empty map.
pub fn char_counts(text: &str) -> HashMap<char, usize> {
    Signature::of(text).counts
}

/// Check whether `candidate` is an anagram of the string `target` was built from.
///
/// Lengths are compared first. Then each character of the candidate is
/// consumed from a private copy of the target counts; a character that is
/// missing or already used up means the candidate is not an anagram.
/// `target` itself is never modified.
///
/// # Arguments
///
/// * `candidate` - String to test
/// * `target` - Signature of the key
///
/// # Returns
///
/// True if the candidate has exactly the same characters as the target
pub fn is_anagram(candidate: &str, target: &Signature) -> bool {
    if candidate.chars().count() != target.len() {
        return false;
    }

    let mut remaining = target.counts.clone();

    for c in candidate.chars() {
        match remaining.get_mut(&c) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }

    // Equal lengths and no overdraw means every count reached zero
    true
}
