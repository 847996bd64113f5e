use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use super::DirectoryEntry;
use crate::error::ListError;

/// List the immediate children of `dir` in filesystem order.
///
/// `.` and `..` are never returned. Other dot-entries are dropped unless
/// `include_hidden` is set. The directory handle is closed before returning,
/// whether enumeration succeeds or not.
pub fn read_entries(dir: &Path, include_hidden: bool) -> Result<Vec<DirectoryEntry>, ListError> {
    let meta = fs::metadata(dir).map_err(|e| ListError::directory_unavailable(dir, e))?;
    if !meta.is_dir() {
        return Err(ListError::directory_unavailable(
            dir,
            io::Error::other("Not a directory"),
        ));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);
    collect_entries(dir, include_hidden, walker)
}

/// Gather children from a depth-1 walk of `dir`.
///
/// A failure at depth 0 means the directory itself could not be opened and
/// fails the whole read. Deeper failures belong to a single child, which is
/// skipped.
fn collect_entries<I>(
    dir: &Path,
    include_hidden: bool,
    walk: I,
) -> Result<Vec<DirectoryEntry>, ListError>
where
    I: IntoIterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut entries = Vec::new();
    for entry_result in walk {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ListError::directory_unavailable(dir, walk_io_error(e)));
            }
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                let error = walk_io_error(e);
                tracing::warn!(path = %path.display(), %error, "skipping unreadable entry");
                continue;
            }
        };
        let child = DirectoryEntry::new(dir, entry.file_name().to_os_string());
        if !include_hidden && child.is_hidden() {
            continue;
        }
        entries.push(child);
    }

    tracing::debug!(
        dir = %dir.display(),
        count = entries.len(),
        include_hidden,
        "read directory"
    );
    Ok(entries)
}

/// The OS error behind a walkdir failure, without walkdir's path prefix.
fn walk_io_error(e: walkdir::Error) -> io::Error {
    e.into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop"))
}
