//! File-type color classification.

use crate::metadata::{EntryMetadata, FileKind, Permissions};
use crossterm::style::{Attribute, Color, ContentStyle};
use std::path::Path;

const ARCHIVE_EXTENSIONS: &[&str] = &["tar", "gz", "zip", "rar", "7z", "bz2"];

/// Display category of an entry. Mapping a category to concrete terminal
/// styling is done by [`ColorCategory::style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Directory,
    Symlink,
    Executable,
    Archive,
    Special,
    Plain,
}

/// Classify an entry. First match wins: type identity, then permissions,
/// then name, then the remaining special types.
pub fn classify(name: &str, meta: &EntryMetadata) -> ColorCategory {
    classify_parts(name, meta.kind, meta.permissions)
}

/// Same as [`classify`] for callers that only hold the raw parts.
pub fn classify_parts(name: &str, kind: FileKind, permissions: Permissions) -> ColorCategory {
    match kind {
        FileKind::Directory => return ColorCategory::Directory,
        FileKind::Symlink => return ColorCategory::Symlink,
        _ => {}
    }
    if permissions.is_executable() {
        return ColorCategory::Executable;
    }
    if has_archive_extension(name) {
        return ColorCategory::Archive;
    }
    if kind.is_special() {
        return ColorCategory::Special;
    }
    ColorCategory::Plain
}

fn has_archive_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARCHIVE_EXTENSIONS.contains(&ext))
}

impl ColorCategory {
    /// Terminal style for this category; `None` means print unstyled.
    pub fn style(self) -> Option<ContentStyle> {
        let (fg, extra) = match self {
            ColorCategory::Directory => (Color::Blue, None),
            ColorCategory::Symlink => (Color::Cyan, None),
            ColorCategory::Executable => (Color::Green, None),
            ColorCategory::Archive => (Color::Red, None),
            ColorCategory::Special => (Color::Yellow, Some(Attribute::Reverse)),
            ColorCategory::Plain => return None,
        };
        let mut style = ContentStyle::new();
        style.foreground_color = Some(fg);
        style.attributes.set(Attribute::Bold);
        if let Some(attr) = extra {
            style.attributes.set(attr);
        }
        Some(style)
    }
}
