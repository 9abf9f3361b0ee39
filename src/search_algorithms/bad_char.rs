use crate::alphabet::{Alphabet, Symbol};
use crate::error::{Result, SequenceRole};

/// Rightmost occurrence of every alphabet symbol in the pattern.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    rightmost: Vec<Option<usize>>,
}

impl BadCharTable {
    /// Build the bad character table for Boyer-Moore algorithm
    pub fn build<S: Symbol>(pattern: &[S], alphabet: Alphabet) -> Result<Self> {
        alphabet.validate(pattern, SequenceRole::Pattern)?;

        let mut rightmost = vec![None; alphabet.size()];
        for (i, &symbol) in pattern.iter().enumerate() {
            rightmost[symbol.index()] = Some(i);
        }

        Ok(Self { rightmost })
    }

    pub fn alphabet_size(&self) -> usize {
        self.rightmost.len()
    }

    /// `None` when the symbol never occurs in the pattern.
    #[inline]
    pub fn rightmost<S: Symbol>(&self, symbol: S) -> Option<usize> {
        self.rightmost.get(symbol.index()).copied().flatten()
    }

    /// Shift implied by text symbol `symbol` mismatching pattern index `j`.
    #[inline]
    pub fn shift<S: Symbol>(&self, symbol: S, j: usize) -> usize {
        match self.rightmost(symbol) {
            Some(p) if p < j => j - p,
            Some(_) => 1,
            None => j + 1,
        }
    }
}
