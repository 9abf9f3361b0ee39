use super::border::BorderTable;
use super::{check_inputs, SearchAlgorithmTrait, SearchOptions};
use crate::alphabet::{Alphabet, Symbol};
use crate::error::Result;

/// Knuth-Morris-Pratt: one left-to-right pass, falling back along the
/// pattern's border chain on mismatch.
#[derive(Debug, Clone, Default)]
pub struct KmpSearch {
    alphabet: Alphabet,
}

impl KmpSearch {
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            alphabet: options.alphabet,
        }
    }
}

impl<S: Symbol> SearchAlgorithmTrait<S> for KmpSearch {
    fn search(&self, text: &[S], pattern: &[S]) -> Result<Vec<usize>> {
        if !check_inputs(self.alphabet, text, pattern)? {
            return Ok(Vec::new());
        }

        let m = pattern.len();
        let borders = BorderTable::build(pattern);
        let mut matches = Vec::new();

        // j symbols of the pattern are matched up to the current text symbol
        let mut j = 0;
        for (i, &symbol) in text.iter().enumerate() {
            while j > 0 && pattern[j] != symbol {
                j = borders.border_of(j);
            }
            if pattern[j] == symbol {
                j += 1;
            }
            if j == m {
                matches.push(i + 1 - m);
                j = borders.border_of(j);
            }
        }

        Ok(matches)
    }

    fn name(&self) -> &'static str {
        "KMP"
    }
}
