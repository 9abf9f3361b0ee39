pub mod alphabet;
pub mod cli;
pub mod compare;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;
pub mod processor;
pub mod search_algorithms;
pub mod walker;

pub use crate::alphabet::{Alphabet, Symbol};
pub use crate::error::{Result, SearchError, SequenceRole};
pub use clap::Parser;
pub use cli::{Cli, Commands};
pub use processor::{search_file, search_files, SearchMatch};
pub use search_algorithms::{
    search, BoyerMoore, HashParams, Heuristics, SearchAlgorithm, SearchAlgorithmFactory,
    SearchAlgorithmTrait, SearchOptions,
};
pub use walker::{collect_files, walk_dir, CollectedFiles};
