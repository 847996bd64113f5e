//! Directory reading, sorting, and the recursive walk.

mod read;
pub(crate) mod walk;

use crate::error::ListError;
use std::borrow::Cow;
use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub use read::read_entries;
pub use walk::{discover_children, WalkOutcome, Walker};

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name component, as raw bytes from the filesystem.
    pub name: OsString,
    /// Parent path joined with `name`.
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(parent: &Path, name: OsString) -> Self {
        let path = parent.join(&name);
        Self { name, path }
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Dot-entries are hidden unless explicitly requested.
    pub fn is_hidden(&self) -> bool {
        self.name.as_bytes().first() == Some(&b'.')
    }
}

/// Configuration for what gets listed.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    /// Whether to include dot-entries in listings.
    pub show_hidden: bool,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
}

/// Abstraction over directory enumeration so it can be swapped or mocked.
pub trait EntryReader {
    fn read_entries(
        &self,
        dir: &Path,
        include_hidden: bool,
    ) -> Result<Vec<DirectoryEntry>, ListError>;
}

/// Default `EntryReader` that delegates to the walkdir-based implementation.
pub struct WalkdirReader;

impl EntryReader for WalkdirReader {
    fn read_entries(
        &self,
        dir: &Path,
        include_hidden: bool,
    ) -> Result<Vec<DirectoryEntry>, ListError> {
        read_entries(dir, include_hidden)
    }
}

/// Sort by raw name bytes, ascending. No locale rules: `B` sorts before `a`.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}
