use strmatch::search_algorithms::*;
use strmatch::{Alphabet, SearchError, SequenceRole};

const TEXT: &[u8] = b"AABAACAADAABAABA";

fn engines(options: &SearchOptions) -> Vec<Box<dyn SearchAlgorithmTrait<u8>>> {
    SearchAlgorithm::ALL
        .iter()
        .map(|&a| SearchAlgorithmFactory::create::<u8>(a, options))
        .collect()
}

fn assert_all(text: &[u8], pattern: &[u8], expected: &[usize]) {
    for engine in engines(&SearchOptions::default()) {
        assert_eq!(
            engine.search(text, pattern).unwrap(),
            expected,
            "{} on pattern {:?}",
            engine.name(),
            String::from_utf8_lossy(pattern)
        );
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_overlapping_matches() {
        assert_all(TEXT, b"AABA", &[0, 9, 12]);
    }

    #[test]
    fn test_no_occurrence() {
        assert_all(TEXT, b"ZZZZ", &[]);
    }

    #[test]
    fn test_single_symbol_pattern() {
        assert_all(b"AAAA", b"A", &[0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_pattern() {
        assert_all(TEXT, b"", &[]);
        assert_all(b"", b"", &[]);
    }

    #[test]
    fn test_oversized_pattern() {
        assert_all(b"AAB", b"AABA", &[]);
        assert_all(b"", b"A", &[]);
    }

    #[test]
    fn test_pattern_equals_text() {
        assert_all(TEXT, TEXT, &[0]);
    }

    #[test]
    fn test_match_at_text_end() {
        assert_all(b"xxxxxxxend", b"end", &[7]);
    }

    #[test]
    fn test_last_symbol_mismatch() {
        assert_all(b"BAB", b"AB", &[1]);
        assert_all(b"ACABAB", b"AB", &[2, 4]);
    }

    #[test]
    fn test_good_suffix_reoccurrence() {
        assert_all(b"QQQXABYAB", b"XABYAB", &[3]);
        assert_all(b"XABYABXABYAB", b"XABYAB", &[0, 6]);
    }

    #[test]
    fn test_periodic_patterns() {
        assert_all(b"ABABABABAB", b"ABABAB", &[0, 2, 4]);
        assert_all(b"AAAAAA", b"AAA", &[0, 1, 2, 3]);
    }

    #[test]
    fn test_idempotence() {
        for engine in engines(&SearchOptions::default()) {
            let first = engine.search(TEXT, b"AABA").unwrap();
            let second = engine.search(TEXT, b"AABA").unwrap();
            assert_eq!(first, second, "{}", engine.name());
        }
    }

    #[test]
    fn test_convenience_search() {
        assert_eq!(
            search(SearchAlgorithm::Kmp, TEXT, b"AABA").unwrap(),
            vec![0, 9, 12]
        );
    }
}

#[cfg(test)]
mod alphabet_tests {
    use super::*;

    fn dna() -> SearchOptions {
        SearchOptions {
            alphabet: Alphabet::new(4).unwrap(),
            ..SearchOptions::default()
        }
    }

    #[test]
    fn test_small_alphabet() {
        // A=0 C=1 G=2 T=3
        let text = [0u8, 1, 2, 3, 0, 1, 2, 0, 1];
        for engine in engines(&dna()) {
            assert_eq!(engine.search(&text, &[0, 1, 2]).unwrap(), vec![0, 4]);
        }
    }

    #[test]
    fn test_text_symbol_outside_alphabet_fails_fast() {
        for engine in engines(&dna()) {
            let err = engine.search(&[0, 1, 9], &[0]).unwrap_err();
            assert!(
                matches!(
                    err,
                    SearchError::InvalidSymbol {
                        role: SequenceRole::Text,
                        position: 2,
                        value: 9,
                        alphabet_size: 4,
                    }
                ),
                "{}: {err}",
                engine.name()
            );
        }
    }

    #[test]
    fn test_pattern_symbol_outside_alphabet_fails_fast() {
        for engine in engines(&dna()) {
            let err = engine.search(&[0, 1, 2], &[4]).unwrap_err();
            assert!(
                matches!(
                    err,
                    SearchError::InvalidSymbol {
                        role: SequenceRole::Pattern,
                        ..
                    }
                ),
                "{}",
                engine.name()
            );
        }
    }

    #[test]
    fn test_invalid_symbols_reported_even_for_degenerate_inputs() {
        for engine in engines(&dna()) {
            assert!(engine.search(&[7], &[0, 1]).is_err(), "{}", engine.name());
        }
    }

    #[test]
    fn test_char_engines() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let pattern: Vec<char> = "abra".chars().collect();
        for algorithm in SearchAlgorithm::ALL {
            let engine = SearchAlgorithmFactory::create::<char>(algorithm, &SearchOptions::default());
            assert_eq!(engine.search(&text, &pattern).unwrap(), vec![0, 7]);
        }
    }

    #[test]
    fn test_wide_alphabet() {
        let options = SearchOptions {
            alphabet: Alphabet::new(70_000).unwrap(),
            ..SearchOptions::default()
        };
        let text: Vec<u32> = vec![65_000, 1, 65_000, 1, 2];
        for algorithm in SearchAlgorithm::ALL {
            let engine = SearchAlgorithmFactory::create::<u32>(algorithm, &options);
            assert_eq!(engine.search(&text, &[65_000, 1]).unwrap(), vec![0, 2]);
        }
    }
}

#[cfg(test)]
mod boyer_moore_tests {
    use super::*;

    #[test]
    fn test_compiled_pattern_reused_across_texts() {
        let bm = BoyerMoore::new(b"AABA", Alphabet::BYTES).unwrap();
        assert_eq!(bm.find_all(TEXT).unwrap(), vec![0, 9, 12]);
        assert_eq!(bm.find_all(b"AABAABA").unwrap(), vec![0, 3]);
        assert_eq!(bm.find_first(TEXT).unwrap(), Some(0));
    }

    #[test]
    fn test_good_suffix_entries_in_range() {
        let patterns: [&[u8]; 6] = [b"A", b"AB", b"AABA", b"ABCABC", b"GCAGAGAG", b"ZZZZ"];
        for pattern in patterns {
            let bm = BoyerMoore::new(pattern, Alphabet::BYTES).unwrap();
            let table = bm.good_suffix_table();
            assert_eq!(table.len(), pattern.len());
            assert!(table
                .as_slice()
                .iter()
                .all(|&s| (1..=pattern.len()).contains(&s)));
        }
    }

    #[test]
    fn test_heuristics_change_work_not_results() {
        let text = b"HERE IS A SIMPLE EXAMPLE WITH AN EXAMPLE OR TWO".repeat(20);
        let pattern = b"EXAMPLE";

        let full = BoyerMoore::new(pattern, Alphabet::BYTES).unwrap();
        let (expected, full_stats) = full.find_all_with_stats(&text).unwrap();
        assert_eq!(expected.len(), 40);
        assert!(full_stats.alignments < text.len() - pattern.len() + 1);

        for heuristics in [Heuristics::BadCharacterOnly, Heuristics::GoodSuffixOnly] {
            let bm = BoyerMoore::with_heuristics(pattern, Alphabet::BYTES, heuristics).unwrap();
            assert_eq!(bm.find_all(&text).unwrap(), expected, "{heuristics:?}");
        }
    }

    #[test]
    fn test_engine_respects_heuristics_option() {
        let options = SearchOptions {
            heuristics: Heuristics::BadCharacterOnly,
            ..SearchOptions::default()
        };
        let engine = BoyerMooreSearch::new(&options);
        assert_eq!(
            SearchAlgorithmTrait::<u8>::search(&engine, TEXT, b"AABA").unwrap(),
            vec![0, 9, 12]
        );
    }
}
