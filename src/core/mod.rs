/// Core module for anagram matching
///
/// This module contains the character signature computation, the batch
/// matcher and the finder that ties them to input files.

pub mod finder;
pub mod matcher;
pub mod signature;
