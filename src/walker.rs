use crate::error::SearchError;
use ignore::{DirEntry, WalkBuilder};
use log::warn;
use std::path::{Path, PathBuf};

pub fn walk_dir(
    path: &Path,
    recursive: bool,
    show_hidden: bool,
) -> impl Iterator<Item = Result<DirEntry, ignore::Error>> {
    let max_depth = if recursive { None } else { Some(1) };
    WalkBuilder::new(path)
        .hidden(!show_hidden)
        .git_global(!show_hidden)
        .git_ignore(!show_hidden)
        .git_exclude(!show_hidden)
        .ignore(!show_hidden)
        .max_depth(max_depth)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build()
}

/// Files found under the search roots, plus the paths that could not be walked.
#[derive(Debug, Default)]
pub struct CollectedFiles {
    pub files: Vec<PathBuf>,
    pub errors: Vec<SearchError>,
}

/// Regular files under each root; a root that is itself a file is kept as is.
/// Missing roots and unreadable entries end up in `errors`.
pub fn collect_files(roots: &[PathBuf], recursive: bool, show_hidden: bool) -> CollectedFiles {
    let mut collected = CollectedFiles::default();
    for root in roots {
        if !root.exists() {
            warn!("Search path does not exist: {}", root.display());
            collected.errors.push(SearchError::FileProcessing {
                path: root.clone(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file or directory",
                )),
            });
            continue;
        }

        for entry in walk_dir(root, recursive, show_hidden) {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                    collected.files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Skipping entry under {}: {e}", root.display());
                    collected.errors.push(SearchError::FileProcessing {
                        path: root.clone(),
                        source: Box::new(e),
                    });
                }
            }
        }
    }
    collected
}
