use super::{check_inputs, SearchAlgorithmTrait, SearchOptions};
use crate::alphabet::{Alphabet, Symbol};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Base and modulus of the Rabin-Karp polynomial hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    pub base: u64,
    pub modulus: u64,
}

impl HashParams {
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        let params = Self { base, modulus };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base == 0 {
            return Err(SearchError::Config("hash base must be nonzero".to_string()));
        }
        if self.modulus < 2 {
            return Err(SearchError::Config(format!(
                "hash modulus must be at least 2, got {}",
                self.modulus
            )));
        }
        Ok(())
    }

    #[inline]
    fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    #[inline]
    fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    /// `a - b` for `a`, `b` already reduced.
    #[inline]
    fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            self.modulus - (b - a)
        }
    }

    fn hash<S: Symbol>(&self, seq: &[S]) -> u64 {
        seq.iter().fold(0, |hash, &s| {
            self.add(self.mul(hash, self.base), s.index() as u64)
        })
    }

    /// `base^(exp) mod modulus`
    fn power(&self, exp: usize) -> u64 {
        (0..exp).fold(1 % self.modulus, |acc, _| self.mul(acc, self.base))
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: 256,
            modulus: 1_000_000_007,
        }
    }
}

/// Rabin-Karp algorithm for rolling hash search
#[derive(Debug, Clone, Default)]
pub struct RabinKarpSearch {
    alphabet: Alphabet,
    params: HashParams,
}

impl RabinKarpSearch {
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            alphabet: options.alphabet,
            params: options.hash,
        }
    }
}

impl<S: Symbol> SearchAlgorithmTrait<S> for RabinKarpSearch {
    fn search(&self, text: &[S], pattern: &[S]) -> Result<Vec<usize>> {
        self.params.validate()?;
        if !check_inputs(self.alphabet, text, pattern)? {
            return Ok(Vec::new());
        }

        let n = text.len();
        let m = pattern.len();
        let params = &self.params;

        let pattern_hash = params.hash(pattern);
        let mut window_hash = params.hash(&text[..m]);
        // weight of the symbol leaving the window
        let lead = params.power(m - 1);

        let mut matches = Vec::new();
        for s in 0..=n - m {
            if window_hash == pattern_hash && text[s..s + m] == *pattern {
                matches.push(s);
            }

            if s < n - m {
                let outgoing = params.mul(text[s].index() as u64 % params.modulus, lead);
                window_hash = params.sub(window_hash, outgoing);
                window_hash = params.add(params.mul(window_hash, params.base), text[s + m].index() as u64);
            }
        }

        Ok(matches)
    }

    fn name(&self) -> &'static str {
        "Rabin-Karp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_hash_matches_direct_hash() {
        let params = HashParams::default();
        let text = b"AABAACAADAABAABA";
        let m = 4;
        let lead = params.power(m - 1);

        let mut rolling = params.hash(&text[..m]);
        for s in 0..text.len() - m {
            let outgoing = params.mul(text[s] as u64, lead);
            rolling = params.sub(rolling, outgoing);
            rolling = params.add(params.mul(rolling, params.base), text[s + m] as u64);
            assert_eq!(rolling, params.hash(&text[s + 1..s + 1 + m]));
        }
    }

    #[test]
    fn test_collisions_are_confirmed() {
        // modulus 2 collides on nearly every window
        let options = SearchOptions {
            hash: HashParams::new(3, 2).unwrap(),
            ..SearchOptions::default()
        };
        let rk = RabinKarpSearch::new(&options);
        assert_eq!(rk.search(b"ABCABDABC".as_slice(), b"ABC".as_slice()).unwrap(), vec![0, 6]);
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let options = SearchOptions {
            hash: HashParams::new(u64::MAX - 1, u64::MAX).unwrap(),
            ..SearchOptions::default()
        };
        let rk = RabinKarpSearch::new(&options);
        let text = [255u8; 64];
        assert_eq!(rk.search(text.as_slice(), [255u8; 8].as_slice()).unwrap().len(), 57);
    }

    #[test]
    fn test_invalid_params() {
        assert!(HashParams::new(0, 101).is_err());
        assert!(HashParams::new(256, 1).is_err());
    }
}
