use crate::output::OutputFormat;
use crate::search_algorithms::{Heuristics, SearchAlgorithm};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(long, global = true, value_parser, default_value_t = false)]
    pub verbose: bool,

    #[clap(long, global = true, value_parser)]
    pub log: Option<PathBuf>,

    /// Config file to use instead of the discovered one
    #[clap(long, global = true, value_parser)]
    pub config: Option<PathBuf>,

    /// Override the Boyer-Moore shift rules from the config
    #[clap(long, global = true, value_enum)]
    pub heuristics: Option<Heuristics>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search an inline text and print the offsets
    Find {
        pattern: String,

        text: String,

        #[clap(short, long, value_enum)]
        algorithm: Option<SearchAlgorithm>,
    },
    /// Search files
    Search {
        pattern: String,

        #[clap(default_value = ".")]
        paths: Vec<PathBuf>,

        #[clap(short, long, value_enum)]
        algorithm: Option<SearchAlgorithm>,

        #[clap(short, long, value_parser, default_value_t = false)]
        recursive: bool,

        #[clap(long, value_parser, default_value_t = false)]
        hidden: bool,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Run every engine on the same input and check they agree
    Compare {
        pattern: String,

        #[clap(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        #[clap(long, value_parser)]
        file: Option<PathBuf>,
    },
    /// Run the built-in demo for one engine, or all of them
    Demo {
        #[clap(short, long, value_enum)]
        algorithm: Option<SearchAlgorithm>,
    },
    /// Generate shell completions
    Completions {
        #[clap(value_enum)]
        shell: Shell,
    },
}
