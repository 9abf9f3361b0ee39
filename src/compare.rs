//! Cross-validation: run every engine on one input and check they agree
use crate::error::Result;
use crate::search_algorithms::{SearchAlgorithm, SearchAlgorithmFactory, SearchOptions};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct EngineRun {
    pub algorithm: SearchAlgorithm,
    pub name: &'static str,
    pub offsets: Vec<usize>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub runs: Vec<EngineRun>,
}

impl Comparison {
    pub fn agrees(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].offsets == pair[1].offsets)
    }

    /// Engines whose offsets differ from the first run.
    pub fn dissenters(&self) -> Vec<&EngineRun> {
        match self.runs.split_first() {
            Some((reference, rest)) => rest
                .iter()
                .filter(|run| run.offsets != reference.offsets)
                .collect(),
            None => Vec::new(),
        }
    }
}

pub fn compare_engines(text: &[u8], pattern: &[u8], options: &SearchOptions) -> Result<Comparison> {
    let mut runs = Vec::with_capacity(SearchAlgorithm::ALL.len());

    for algorithm in SearchAlgorithm::ALL {
        let engine = SearchAlgorithmFactory::create::<u8>(algorithm, options);
        let start = Instant::now();
        let offsets = engine.search(text, pattern)?;
        let elapsed = start.elapsed();
        log::debug!("{} found {} matches in {elapsed:.2?}", engine.name(), offsets.len());

        runs.push(EngineRun {
            algorithm,
            name: engine.name(),
            offsets,
            elapsed,
        });
    }

    Ok(Comparison { runs })
}
