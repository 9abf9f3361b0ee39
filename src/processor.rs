use crate::error::{Result, SearchError};
use crate::search_algorithms::{SearchAlgorithm, SearchAlgorithmFactory, SearchOptions};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A match located inside a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub path: PathBuf,
    pub offset: usize,
    pub line_number: usize,
    pub column: usize,
    pub line: String,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path.display(),
            self.line_number,
            self.column,
            self.line
        )
    }
}

/// Turns byte offsets into line/column positions. Lines and columns are
/// 1-based; columns count bytes.
pub fn locate(path: &Path, content: &[u8], offsets: &[usize]) -> Vec<SearchMatch> {
    let mut results = Vec::with_capacity(offsets.len());
    let mut line_number = 1;
    let mut line_start = 0;
    let mut scanned = 0;

    for &offset in offsets {
        for (i, &b) in content[scanned..offset].iter().enumerate() {
            if b == b'\n' {
                line_number += 1;
                line_start = scanned + i + 1;
            }
        }
        scanned = offset;

        let line_end = content[line_start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(content.len(), |p| line_start + p);
        let line = String::from_utf8_lossy(&content[line_start..line_end])
            .trim_end_matches('\r')
            .to_string();

        results.push(SearchMatch {
            path: path.to_path_buf(),
            offset,
            line_number,
            column: offset - line_start + 1,
            line,
        });
    }

    results
}

pub fn search_file(
    path: &Path,
    pattern: &[u8],
    algorithm: SearchAlgorithm,
    options: &SearchOptions,
) -> Result<Vec<SearchMatch>> {
    let content = fs::read(path)?;
    let engine = SearchAlgorithmFactory::create::<u8>(algorithm, options);
    let offsets = engine.search(&content, pattern)?;
    debug!(
        "{}: {} matches in {} bytes ({})",
        path.display(),
        offsets.len(),
        content.len(),
        engine.name()
    );
    Ok(locate(path, &content, &offsets))
}

/// Outcome of searching many files: matches in path order plus per-file errors.
#[derive(Debug, Default)]
pub struct FileSearchReport {
    pub matches: Vec<SearchMatch>,
    pub errors: Vec<SearchError>,
    pub files_searched: usize,
}

/// Search every file independently on the rayon pool.
pub fn search_files(
    files: &[PathBuf],
    pattern: &[u8],
    algorithm: SearchAlgorithm,
    options: &SearchOptions,
) -> FileSearchReport {
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| {
            search_file(path, pattern, algorithm, options).map_err(|e| {
                warn!("Skipping {}: {e}", path.display());
                SearchError::FileProcessing {
                    path: path.clone(),
                    source: Box::new(e),
                }
            })
        })
        .collect();

    let mut report = FileSearchReport {
        files_searched: files.len(),
        ..FileSearchReport::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(matches) => report.matches.extend(matches),
            Err(e) => report.errors.push(e),
        }
    }
    report
}
