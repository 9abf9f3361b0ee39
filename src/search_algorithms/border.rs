//! Border (failure) function shared by KMP and the Boyer-Moore preprocessing
use std::ops::Index;

/// `table[i]` is the length of the longest proper prefix of `seq[..=i]`
/// that is also a suffix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTable {
    table: Vec<usize>,
}

impl BorderTable {
    /// Build the border table of `seq` in O(len) steps.
    ///
    /// An empty sequence yields an empty table; no caller relies on it.
    pub fn build<S: PartialEq>(seq: &[S]) -> Self {
        let m = seq.len();
        let mut table = vec![0; m];

        let mut len = 0;
        let mut i = 1;

        while i < m {
            if seq[i] == seq[len] {
                len += 1;
                table[i] = len;
                i += 1;
            } else if len != 0 {
                len = table[len - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }

        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Longest border of the whole sequence.
    pub fn longest(&self) -> usize {
        self.table.last().copied().unwrap_or(0)
    }

    /// Longest proper border of the prefix of length `len`; 0 for `len == 0`.
    #[inline]
    pub fn border_of(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.table[len - 1]
        }
    }

    /// Every nonzero border of the whole sequence, longest first.
    pub fn chain(&self) -> BorderChain<'_> {
        BorderChain {
            table: self,
            next: self.longest(),
        }
    }
}

impl Index<usize> for BorderTable {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.table[i]
    }
}

pub struct BorderChain<'a> {
    table: &'a BorderTable,
    next: usize,
}

impl Iterator for BorderChain<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == 0 {
            return None;
        }
        let current = self.next;
        self.next = self.table.border_of(current);
        Some(current)
    }
}
