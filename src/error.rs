use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which input sequence a symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRole {
    Text,
    Pattern,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceRole::Text => write!(f, "text"),
            SequenceRole::Pattern => write!(f, "pattern"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid symbol in {role} at position {position}: value {value} is outside an alphabet of size {alphabet_size}")]
    InvalidSymbol {
        role: SequenceRole,
        position: usize,
        value: usize,
        alphabet_size: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to process file '{path}': {source}")]
    FileProcessing {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("An unexpected error occurred: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
