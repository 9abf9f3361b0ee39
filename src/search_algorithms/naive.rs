use super::{check_inputs, SearchAlgorithmTrait, SearchOptions};
use crate::alphabet::{Alphabet, Symbol};
use crate::error::Result;

/// Brute-force scan of every alignment.
#[derive(Debug, Clone, Default)]
pub struct NaiveSearch {
    alphabet: Alphabet,
}

impl NaiveSearch {
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            alphabet: options.alphabet,
        }
    }
}

impl<S: Symbol> SearchAlgorithmTrait<S> for NaiveSearch {
    fn search(&self, text: &[S], pattern: &[S]) -> Result<Vec<usize>> {
        if !check_inputs(self.alphabet, text, pattern)? {
            return Ok(Vec::new());
        }

        let m = pattern.len();
        Ok(text
            .windows(m)
            .enumerate()
            .filter(|(_, window)| *window == pattern)
            .map(|(i, _)| i)
            .collect())
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
