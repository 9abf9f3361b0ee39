//! Boyer-Moore search with the bad-character and strong good-suffix rules
use super::bad_char::BadCharTable;
use super::border::BorderTable;
use super::good_suffix::GoodSuffixTable;
use super::{SearchAlgorithmTrait, SearchOptions};
use crate::alphabet::{Alphabet, Symbol};
use crate::error::{Result, SequenceRole};
use log::debug;
use serde::{Deserialize, Serialize};

/// Which shift rules take part in the scan. A disabled rule contributes the
/// neutral shift of 1; matches are identical in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristics {
    #[default]
    Full,
    BadCharacterOnly,
    GoodSuffixOnly,
}

/// Counters collected by [`BoyerMoore::find_all_with_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub alignments: usize,
    pub comparisons: usize,
}

/// A pattern preprocessed for Boyer-Moore scanning.
#[derive(Debug, Clone)]
pub struct BoyerMoore<S> {
    pattern: Vec<S>,
    alphabet: Alphabet,
    heuristics: Heuristics,
    bad_char: BadCharTable,
    good_suffix: GoodSuffixTable,
    match_shift: usize,
}

impl<S: Symbol> BoyerMoore<S> {
    pub fn new(pattern: &[S], alphabet: Alphabet) -> Result<Self> {
        Self::with_heuristics(pattern, alphabet, Heuristics::Full)
    }

    pub fn with_heuristics(pattern: &[S], alphabet: Alphabet, heuristics: Heuristics) -> Result<Self> {
        let m = pattern.len();
        let bad_char = BadCharTable::build(pattern, alphabet)?;
        let borders = BorderTable::build(pattern);

        let good_suffix = match heuristics {
            Heuristics::BadCharacterOnly => GoodSuffixTable::neutral(m),
            Heuristics::Full | Heuristics::GoodSuffixOnly => GoodSuffixTable::build(pattern, &borders),
        };

        // After a full match the next occurrence can start no sooner than one
        // period further on.
        let match_shift = match borders.longest() {
            b if m > 1 && b > 0 => m - b,
            _ => 1,
        };

        debug!(
            "Boyer-Moore preprocessed pattern of length {m} ({heuristics:?}, alphabet {}, match shift {match_shift})",
            alphabet.size()
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            alphabet,
            heuristics,
            bad_char,
            good_suffix,
            match_shift,
        })
    }

    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix
    }

    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char
    }

    /// All match offsets in `text`, ascending.
    pub fn find_all(&self, text: &[S]) -> Result<Vec<usize>> {
        let mut matches = Vec::new();
        self.scan(text, &mut ScanStats::default(), |s| {
            matches.push(s);
            true
        })?;
        Ok(matches)
    }

    pub fn find_first(&self, text: &[S]) -> Result<Option<usize>> {
        let mut first = None;
        self.scan(text, &mut ScanStats::default(), |s| {
            first = Some(s);
            false
        })?;
        Ok(first)
    }

    pub fn find_all_with_stats(&self, text: &[S]) -> Result<(Vec<usize>, ScanStats)> {
        let mut matches = Vec::new();
        let mut stats = ScanStats::default();
        self.scan(text, &mut stats, |s| {
            matches.push(s);
            true
        })?;
        Ok((matches, stats))
    }

    /// Right-to-left scan. `on_match` returns whether to keep scanning.
    fn scan<F>(&self, text: &[S], stats: &mut ScanStats, mut on_match: F) -> Result<()>
    where
        F: FnMut(usize) -> bool,
    {
        self.alphabet.validate(text, SequenceRole::Text)?;

        let n = text.len();
        let m = self.pattern.len();
        if m == 0 || m > n {
            return Ok(());
        }

        let mut s = 0;
        while s <= n - m {
            stats.alignments += 1;
            let window = &text[s..s + m];

            let mut mismatch = None;
            for j in (0..m).rev() {
                stats.comparisons += 1;
                if self.pattern[j] != window[j] {
                    mismatch = Some(j);
                    break;
                }
            }

            match mismatch {
                None => {
                    if !on_match(s) {
                        return Ok(());
                    }
                    s += self.match_shift;
                }
                Some(j) => s += self.mismatch_shift(window[j], j),
            }
        }

        Ok(())
    }

    #[inline]
    fn mismatch_shift(&self, bad: S, j: usize) -> usize {
        let bad_char_shift = match self.heuristics {
            Heuristics::GoodSuffixOnly => 1,
            Heuristics::Full | Heuristics::BadCharacterOnly => self.bad_char.shift(bad, j),
        };
        bad_char_shift.max(self.good_suffix.shift(j))
    }
}

/// Boyer-Moore string search algorithm for efficient text matching
#[derive(Debug, Clone, Default)]
pub struct BoyerMooreSearch {
    alphabet: Alphabet,
    heuristics: Heuristics,
}

impl BoyerMooreSearch {
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            alphabet: options.alphabet,
            heuristics: options.heuristics,
        }
    }
}

impl<S: Symbol> SearchAlgorithmTrait<S> for BoyerMooreSearch {
    fn search(&self, text: &[S], pattern: &[S]) -> Result<Vec<usize>> {
        BoyerMoore::with_heuristics(pattern, self.alphabet, self.heuristics)?.find_all(text)
    }

    fn name(&self) -> &'static str {
        "Boyer-Moore"
    }
}
