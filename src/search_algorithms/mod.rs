//! Exact substring search engines sharing one contract:
//! `(text, pattern) -> ascending match offsets`.
pub mod bad_char;
pub mod border;
pub mod boyer_moore;
pub mod good_suffix;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::{Result, SequenceRole};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use bad_char::BadCharTable;
pub use border::BorderTable;
pub use boyer_moore::{BoyerMoore, BoyerMooreSearch, Heuristics, ScanStats};
pub use good_suffix::GoodSuffixTable;
pub use kmp::KmpSearch;
pub use naive::NaiveSearch;
pub use rabin_karp::{HashParams, RabinKarpSearch};

/// Trait for search algorithms
///
/// Offsets are ascending and duplicate-free. An empty pattern, or one longer
/// than the text, matches nowhere. Symbols outside the configured alphabet are
/// rejected with [`crate::error::SearchError::InvalidSymbol`].
pub trait SearchAlgorithmTrait<S: Symbol>: Send + Sync {
    fn search(&self, text: &[S], pattern: &[S]) -> Result<Vec<usize>>;
    fn name(&self) -> &'static str;
}

/// Search algorithm types
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    Naive,
    Kmp,
    #[default]
    BoyerMoore,
    RabinKarp,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Naive,
        SearchAlgorithm::Kmp,
        SearchAlgorithm::BoyerMoore,
        SearchAlgorithm::RabinKarp,
    ];
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Naive => write!(f, "naive"),
            SearchAlgorithm::Kmp => write!(f, "kmp"),
            SearchAlgorithm::BoyerMoore => write!(f, "boyer-moore"),
            SearchAlgorithm::RabinKarp => write!(f, "rabin-karp"),
        }
    }
}

/// Values handed to every engine at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub alphabet: Alphabet,
    pub hash: HashParams,
    pub heuristics: Heuristics,
}

/// Search algorithm factory
pub struct SearchAlgorithmFactory;

impl SearchAlgorithmFactory {
    pub fn create<S: Symbol + 'static>(
        algorithm: SearchAlgorithm,
        options: &SearchOptions,
    ) -> Box<dyn SearchAlgorithmTrait<S>> {
        match algorithm {
            SearchAlgorithm::Naive => Box::new(NaiveSearch::new(options)),
            SearchAlgorithm::Kmp => Box::new(KmpSearch::new(options)),
            SearchAlgorithm::BoyerMoore => Box::new(BoyerMooreSearch::new(options)),
            SearchAlgorithm::RabinKarp => Box::new(RabinKarpSearch::new(options)),
        }
    }
}

/// Run `algorithm` once over byte strings with default options.
pub fn search(algorithm: SearchAlgorithm, text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    SearchAlgorithmFactory::create::<u8>(algorithm, &SearchOptions::default()).search(text, pattern)
}

/// Validates both sequences, then reports whether a match is possible at all.
pub(crate) fn check_inputs<S: Symbol>(alphabet: Alphabet, text: &[S], pattern: &[S]) -> Result<bool> {
    alphabet.validate(pattern, SequenceRole::Pattern)?;
    alphabet.validate(text, SequenceRole::Text)?;
    Ok(!pattern.is_empty() && pattern.len() <= text.len())
}
