use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::hint::black_box;
use strmatch::search_algorithms::{
    BoyerMoore, Heuristics, SearchAlgorithm, SearchAlgorithmFactory, SearchOptions,
};
use strmatch::Alphabet;

fn random_text(len: usize, symbols: &[u8]) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}

fn engines_benchmark(c: &mut Criterion) {
    let inputs = [
        ("english", b"the quick brown fox jumps over the lazy dog ".repeat(2_000), b"lazy cat".to_vec()),
        ("dna", random_text(100_000, b"ACGT"), b"GATTACAGATTACA".to_vec()),
        ("periodic", b"AB".repeat(50_000), b"ABABABAB".to_vec()),
    ];

    let mut group = c.benchmark_group("engines");
    for (label, text, pattern) in &inputs {
        for algorithm in SearchAlgorithm::ALL {
            let engine = SearchAlgorithmFactory::create::<u8>(algorithm, &SearchOptions::default());
            group.bench_with_input(BenchmarkId::new(algorithm.to_string(), label), text, |b, text| {
                b.iter(|| engine.search(black_box(text), black_box(pattern)))
            });
        }
    }
    group.finish();
}

fn heuristics_benchmark(c: &mut Criterion) {
    let text = b"here is a simple example with an example or two ".repeat(2_000);
    let pattern = b"example";

    let mut group = c.benchmark_group("boyer_moore_heuristics");
    for heuristics in [
        Heuristics::Full,
        Heuristics::BadCharacterOnly,
        Heuristics::GoodSuffixOnly,
    ] {
        let bm = BoyerMoore::with_heuristics(pattern, Alphabet::BYTES, heuristics)
            .expect("pattern is within the byte alphabet");
        group.bench_function(format!("{heuristics:?}"), |b| {
            b.iter(|| bm.find_all(black_box(&text)))
        });
    }
    group.finish();
}

criterion_group!(benches, engines_benchmark, heuristics_benchmark);
criterion_main!(benches);
