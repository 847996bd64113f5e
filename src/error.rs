//! Typed failures raised while reading directories and entries.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures local to one directory or one entry. None of them aborts a run.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened or enumerated.
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Metadata lookup failed for a single entry (broken link, deleted mid-walk).
    #[error("cannot access '{}': {source}", path.display())]
    EntryStatUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    pub fn directory_unavailable(path: &Path, source: io::Error) -> Self {
        Self::DirectoryUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn entry_stat_unavailable(path: &Path, source: io::Error) -> Self {
        Self::EntryStatUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the directory or entry the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryUnavailable { path, .. } | Self::EntryStatUnavailable { path, .. } => {
                path
            }
        }
    }
}
