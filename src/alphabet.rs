//! Symbols and the fixed alphabet they are drawn from
use crate::error::{Result, SearchError, SequenceRole};
use std::fmt::Debug;

/// A value that can be placed in a text or pattern.
///
/// `index` maps the symbol onto `0..alphabet_size`; it is what the
/// bad-character table is indexed by and what Rabin-Karp hashes.
pub trait Symbol: Copy + Eq + Debug + Send + Sync {
    fn index(self) -> usize;
}

impl Symbol for u8 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u16 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u32 {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for char {
    #[inline]
    fn index(self) -> usize {
        self as u32 as usize
    }
}

/// Size of the symbol alphabet, fixed for the lifetime of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// Every byte value.
    pub const BYTES: Alphabet = Alphabet { size: 256 };
    /// 7-bit ASCII.
    pub const ASCII: Alphabet = Alphabet { size: 128 };
    /// Every Unicode scalar value; the largest alphabet a table is built for.
    pub const MAX_SIZE: usize = char::MAX as usize + 1;

    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SearchError::Config(
                "alphabet size must be at least 1".to_string(),
            ));
        }
        if size > Self::MAX_SIZE {
            return Err(SearchError::Config(format!(
                "alphabet size {size} exceeds the maximum of {}",
                Self::MAX_SIZE
            )));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains<S: Symbol>(&self, symbol: S) -> bool {
        symbol.index() < self.size
    }

    /// Fails on the first symbol outside the alphabet.
    pub fn validate<S: Symbol>(&self, sequence: &[S], role: SequenceRole) -> Result<()> {
        match sequence.iter().position(|&s| !self.contains(s)) {
            Some(position) => Err(SearchError::InvalidSymbol {
                role,
                position,
                value: sequence[position].index(),
                alphabet_size: self.size,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BYTES
    }
}
