//! Turning sorted entries into output lines for the selected layout.

use crate::classify::{classify, classify_parts, ColorCategory};
use crate::error::ListError;
use crate::layout::{self, Cell};
use crate::listing::DirectoryEntry;
use crate::metadata::{format_mod_time, kind_and_permissions, EntryMetadata};

/// How a directory's entries are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// One name per line.
    SingleColumn,
    /// Down then across.
    #[default]
    Grid,
    /// Across then down.
    Across,
    /// One detailed line per entry.
    Long,
}

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: LayoutMode,
    /// Whether to emit color styling.
    pub use_color: bool,
    /// Current terminal width in columns; zero means unknown.
    pub terminal_width: usize,
}

/// Lines for one directory plus the entries whose metadata could not be read
/// in long mode.
#[derive(Debug, Default)]
pub struct RenderedListing {
    pub lines: Vec<String>,
    pub unreadable: Vec<ListError>,
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Printable form of an entry's name.
pub fn display_name(entry: &DirectoryEntry) -> String {
    sanitize_terminal_text(&entry.name_lossy())
}

/// Apply the category's style to already-sanitized text.
pub fn paint(text: &str, category: ColorCategory) -> String {
    match category.style() {
        Some(style) => style.apply(text).to_string(),
        None => text.to_string(),
    }
}

/// Render `entries` (already filtered and sorted) with `config`.
pub fn render_entries(entries: &[DirectoryEntry], config: &RenderConfig) -> RenderedListing {
    if config.mode == LayoutMode::Long {
        return render_long(entries, config.use_color);
    }

    let cells: Vec<Cell> = entries
        .iter()
        .map(|e| name_cell(e, config.use_color))
        .collect();

    let lines = match config.mode {
        LayoutMode::SingleColumn => layout::single_column(&cells),
        LayoutMode::Grid => layout::grid(&cells, config.terminal_width),
        LayoutMode::Across => layout::flow(&cells, config.terminal_width),
        LayoutMode::Long => unreachable!("long mode handled above"),
    };
    RenderedListing {
        lines,
        unreadable: Vec::new(),
    }
}

/// A layout cell for one entry. Entries whose metadata cannot be read are
/// shown uncolored.
fn name_cell(entry: &DirectoryEntry, use_color: bool) -> Cell {
    let name = display_name(entry);
    if !use_color {
        return Cell::plain(name);
    }
    match kind_and_permissions(&entry.path) {
        Ok((kind, permissions)) => {
            let painted = paint(&name, classify_parts(&name, kind, permissions));
            Cell::styled(painted, &name)
        }
        Err(e) => {
            tracing::debug!(error = %e, "rendering entry without color");
            Cell::plain(name)
        }
    }
}

fn render_long(entries: &[DirectoryEntry], use_color: bool) -> RenderedListing {
    let mut rendered = RenderedListing::default();
    for entry in entries {
        let name = display_name(entry);
        match EntryMetadata::query(&entry.path) {
            Ok(meta) => {
                let shown = if use_color {
                    paint(&name, classify(&name, &meta))
                } else {
                    name
                };
                rendered.lines.push(long_line(&shown, &meta));
            }
            Err(e) => {
                tracing::warn!(error = %e, "long listing entry degraded");
                rendered.lines.push(degraded_long_line(&name));
                rendered.unreadable.push(e);
            }
        }
    }
    rendered
}

/// One long-format line: type and permissions, link count, owner, group,
/// size, modification time, then the (possibly colored) name and link target.
pub fn long_line(name: &str, meta: &EntryMetadata) -> String {
    let mut line = format!(
        "{}{} {:>2} {:<8} {:<8} {:>8} {} {}",
        meta.kind.type_char(),
        meta.permissions.to_rwx_string(),
        meta.link_count,
        meta.owner,
        meta.group,
        meta.size,
        format_mod_time(meta.modified),
        name
    );
    if let Some(ref target) = meta.symlink_target {
        line.push_str(" -> ");
        line.push_str(&sanitize_terminal_text(target));
    }
    line
}

/// Placeholder line for an entry whose metadata is unavailable.
pub fn degraded_long_line(name: &str) -> String {
    format!(
        "?????????? {:>2} {:<8} {:<8} {:>8} {:<12} {}",
        "?", "?", "?", "?", "?", name
    )
}
