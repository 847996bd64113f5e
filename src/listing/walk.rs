use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{sort_entries, DirectoryEntry, EntryReader, ListConfig};
use crate::error::ListError;
use crate::metadata::{file_kind, FileKind};
use crate::render::{render_entries, sanitize_terminal_text, RenderConfig};
use crate::PROGRAM_NAME;

/// What a walk did: every directory it tried to list, in visiting order, and
/// how many of them could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub visited: Vec<PathBuf>,
    pub failures: usize,
}

impl WalkOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

/// Lists a directory and, when recursion is enabled, each subdirectory below
/// it, depth first in sorted order.
pub struct Walker<'a, R: EntryReader> {
    reader: &'a R,
    list_config: &'a ListConfig,
    render_config: &'a RenderConfig,
}

impl<'a, R: EntryReader> Walker<'a, R> {
    pub fn new(reader: &'a R, list_config: &'a ListConfig, render_config: &'a RenderConfig) -> Self {
        Self {
            reader,
            list_config,
            render_config,
        }
    }

    /// Walk from `dir`, writing listings to `out` and per-directory problems
    /// to `err`. Only write failures on `out`/`err` are returned as errors;
    /// unreadable directories are reported and skipped.
    pub fn walk<W: Write, E: Write>(
        &self,
        dir: &Path,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<WalkOutcome> {
        let mut outcome = WalkOutcome::default();
        self.visit(dir, out, err, &mut outcome)?;
        Ok(outcome)
    }

    fn visit<W: Write, E: Write>(
        &self,
        dir: &Path,
        out: &mut W,
        err: &mut E,
        outcome: &mut WalkOutcome,
    ) -> io::Result<()> {
        outcome.visited.push(dir.to_path_buf());

        let Some(listed) = self.list_self(dir, out, err, outcome)? else {
            return Ok(());
        };
        if !self.list_config.recursive {
            return Ok(());
        }

        // Dot-directories are descended into even when they are not listed.
        let discovered = if self.list_config.show_hidden {
            Ok(directories_among(listed))
        } else {
            discover_children(self.reader, dir)
        };
        let children = match discovered {
            Ok(children) => children,
            Err(e) => {
                report(out, err, &e, outcome)?;
                return Ok(());
            }
        };

        for child in children {
            writeln!(out)?;
            writeln!(out, "{}:", sanitize_terminal_text(&child.to_string_lossy()))?;
            self.visit(&child, out, err, outcome)?;
        }
        Ok(())
    }

    /// Read, sort and render one directory. Returns the sorted entries, or
    /// `None` when the directory could not be read.
    fn list_self<W: Write, E: Write>(
        &self,
        dir: &Path,
        out: &mut W,
        err: &mut E,
        outcome: &mut WalkOutcome,
    ) -> io::Result<Option<Vec<DirectoryEntry>>> {
        let mut entries = match self.reader.read_entries(dir, self.list_config.show_hidden) {
            Ok(entries) => entries,
            Err(e) => {
                report(out, err, &e, outcome)?;
                return Ok(None);
            }
        };
        sort_entries(&mut entries);

        let rendered = render_entries(&entries, self.render_config);
        if !rendered.unreadable.is_empty() {
            out.flush()?;
        }
        for problem in &rendered.unreadable {
            writeln!(err, "{PROGRAM_NAME}: {problem}")?;
        }
        for line in &rendered.lines {
            writeln!(out, "{line}")?;
        }
        Ok(Some(entries))
    }
}

/// Count and print a directory failure. `out` is flushed first so the message
/// lands after the listing that preceded it.
fn report<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    problem: &ListError,
    outcome: &mut WalkOutcome,
) -> io::Result<()> {
    tracing::debug!(path = %problem.path().display(), "directory skipped");
    outcome.failures += 1;
    out.flush()?;
    writeln!(err, "{PROGRAM_NAME}: {problem}")
}

/// Subdirectories of `dir`, dot-directories included, sorted by name.
///
/// Uses link-aware type checks, so a symlink to a directory is never
/// returned; this is what keeps link cycles from being followed. Performs no
/// output.
pub fn discover_children<R: EntryReader + ?Sized>(
    reader: &R,
    dir: &Path,
) -> Result<Vec<PathBuf>, ListError> {
    let mut entries = reader.read_entries(dir, true)?;
    sort_entries(&mut entries);
    Ok(directories_among(entries))
}

fn directories_among(entries: Vec<DirectoryEntry>) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| match file_kind(&entry.path) {
            Ok(FileKind::Directory) => Some(entry.path),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "entry vanished during discovery");
                None
            }
        })
        .collect()
}
