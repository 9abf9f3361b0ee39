//! Fixed text/pattern pair shared by the per-engine demo binaries
use crate::error::Result;
use crate::output::format_offsets;
use crate::search_algorithms::{SearchAlgorithm, SearchAlgorithmFactory, SearchOptions};

pub const DEMO_TEXT: &str = "AABAACAADAABAABA";
pub const DEMO_PATTERN: &str = "AABA";

/// Lines printed by a demo run, without trailing newlines.
pub fn demo_lines(algorithm: SearchAlgorithm, options: &SearchOptions) -> Result<Vec<String>> {
    let engine = SearchAlgorithmFactory::create::<u8>(algorithm, options);
    let offsets = engine.search(DEMO_TEXT.as_bytes(), DEMO_PATTERN.as_bytes())?;

    Ok(vec![
        format!("Text: {DEMO_TEXT}"),
        format!("Pattern: {DEMO_PATTERN}"),
        format_offsets(&offsets),
    ])
}

/// Entry point of the standalone demo binaries.
pub fn run(algorithm: SearchAlgorithm) -> Result<()> {
    for line in demo_lines(algorithm, &SearchOptions::default())? {
        println!("{line}");
    }
    Ok(())
}
