//! Strong good-suffix shifts for Boyer-Moore
//!
//! `shift(i)` is the smallest move of the alignment that can still produce a
//! match after `pattern[i + 1..]` matched the text and `pattern[i]` did not.
//! It is built from two border tables:
//!
//! 1. the border chain of the pattern itself, for alignments where a prefix of
//!    the pattern lines up with the tail of the good suffix;
//! 2. the border table of the reversed pattern, for alignments where the good
//!    suffix reoccurs inside the pattern behind a different symbol.
//!
//! Both passes write into one table and keep the minimum.
use super::border::BorderTable;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shifts: Vec<usize>,
}

impl GoodSuffixTable {
    /// Build the table for `pattern`, whose border table is `borders`.
    pub fn build<S: Copy + PartialEq>(pattern: &[S], borders: &BorderTable) -> Self {
        let m = pattern.len();
        debug_assert_eq!(borders.len(), m);

        let mut shifts = vec![m; m];
        if m == 0 {
            return Self { shifts };
        }

        Self::apply_prefix_rule(&mut shifts, borders);
        Self::apply_reoccurrence_rule(&mut shifts, pattern);

        debug!("good suffix table built for pattern of length {m}");
        Self { shifts }
    }

    /// A table that never contributes more than the minimum shift of 1.
    pub fn neutral(m: usize) -> Self {
        Self { shifts: vec![1; m] }
    }

    /// The prefix of length `b` (a border of the pattern) is a suffix of every
    /// good suffix at least `b` long, so mismatch position `i` may move by
    /// `m - b` for the longest border `b <= m - 1 - i`.
    fn apply_prefix_rule(shifts: &mut [usize], borders: &BorderTable) {
        let m = shifts.len();
        let mut border = borders.longest();

        for (i, shift) in shifts.iter_mut().enumerate() {
            let good_suffix_len = m - 1 - i;
            while border > good_suffix_len {
                border = borders.border_of(border);
            }
            *shift = (*shift).min(m - border);
        }
    }

    /// Replays the fallbacks of the border function of the reversed pattern.
    ///
    /// At reversed index `j`, a visited border `k` whose next symbol differs
    /// from `rev[j]` says: the pattern suffix of length `k` reoccurs `j - k`
    /// positions to the left, preceded by a symbol other than `pattern[m-1-k]`.
    /// `k == 0` covers a mismatch on the last pattern symbol.
    fn apply_reoccurrence_rule<S: Copy + PartialEq>(shifts: &mut [usize], pattern: &[S]) {
        let m = shifts.len();
        let reversed: Vec<S> = pattern.iter().rev().copied().collect();
        let rev_borders = BorderTable::build(&reversed);

        for j in 1..m {
            let mut k = rev_borders[j - 1];
            loop {
                if reversed[j] == reversed[k] {
                    break;
                }
                let mismatch = m - 1 - k;
                shifts[mismatch] = shifts[mismatch].min(j - k);
                if k == 0 {
                    break;
                }
                k = rev_borders.border_of(k);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.shifts
    }

    #[inline]
    pub fn shift(&self, mismatch: usize) -> usize {
        self.shifts[mismatch]
    }
}
