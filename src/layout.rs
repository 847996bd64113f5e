//! Terminal-width-aware arrangement of rendered names.
//!
//! Every strategy takes cells that are already filtered and sorted and returns
//! the lines to print. Widths are always measured on the uncolored text, so
//! escape sequences in [`Cell::text`] never affect alignment.

use unicode_width::UnicodeWidthStr;

/// Width used when the terminal width is zero or unknown.
pub const FALLBACK_WIDTH: usize = 80;

/// Spaces separating adjacent names.
pub const COLUMN_GAP: usize = 2;

/// A rendered name plus the display width of its uncolored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    /// An unstyled cell; width is measured from the text itself.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = UnicodeWidthStr::width(text.as_str());
        Self { text, width }
    }

    /// A cell whose text may carry escape sequences; `plain` is the visible
    /// text used for measuring.
    pub fn styled(text: String, plain: &str) -> Self {
        Self {
            text,
            width: UnicodeWidthStr::width(plain),
        }
    }
}

/// Column arrangement for the down-then-across grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub columns: usize,
    pub rows: usize,
    pub column_width: usize,
}

impl LayoutPlan {
    /// Plan a grid for `cells`; `None` when there is nothing to lay out.
    pub fn compute(cells: &[Cell], terminal_width: usize) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let width = effective_width(terminal_width);
        let max_len = cells.iter().map(|c| c.width).max().unwrap_or(0);
        let column_width = max_len + COLUMN_GAP;
        let columns = (width / column_width).min(cells.len()).max(1);
        let rows = cells.len().div_ceil(columns);
        Some(Self {
            columns,
            rows,
            column_width,
        })
    }
}

/// Substitute the fallback for a zero width.
pub fn effective_width(terminal_width: usize) -> usize {
    if terminal_width == 0 {
        FALLBACK_WIDTH
    } else {
        terminal_width
    }
}

/// One name per line.
pub fn single_column(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(|c| c.text.clone()).collect()
}

/// Column-major grid: cell `(row, col)` holds index `row + col * rows`.
///
/// Each column is padded to its own widest name plus the gap, which never
/// exceeds the planned column width. The last name on a row gets no padding.
pub fn grid(cells: &[Cell], terminal_width: usize) -> Vec<String> {
    let Some(plan) = LayoutPlan::compute(cells, terminal_width) else {
        return Vec::new();
    };

    let column_widths: Vec<usize> = cells
        .chunks(plan.rows)
        .map(|column| column.iter().map(|c| c.width).max().unwrap_or(0) + COLUMN_GAP)
        .collect();

    (0..plan.rows)
        .map(|row| {
            let mut line = String::new();
            for (col, col_width) in column_widths.iter().enumerate() {
                let idx = row + col * plan.rows;
                let Some(cell) = cells.get(idx) else {
                    break;
                };
                line.push_str(&cell.text);
                if idx + plan.rows < cells.len() {
                    pad(&mut line, col_width - cell.width);
                }
            }
            line
        })
        .collect()
}

/// Row-major flow: names are placed left to right and wrap when the next
/// name plus a trailing gap would pass the terminal width. Names are always
/// separated by exactly [`COLUMN_GAP`] spaces.
pub fn flow(cells: &[Cell], terminal_width: usize) -> Vec<String> {
    let width = effective_width(terminal_width);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut cursor = 0;

    for cell in cells {
        if cursor > 0 && cursor + cell.width + COLUMN_GAP > width {
            lines.push(std::mem::take(&mut line));
            cursor = 0;
        }
        if cursor > 0 {
            pad(&mut line, COLUMN_GAP);
        }
        line.push_str(&cell.text);
        cursor += cell.width + COLUMN_GAP;
    }

    if cursor > 0 {
        lines.push(line);
    }
    lines
}

fn pad(line: &mut String, n: usize) {
    line.extend(std::iter::repeat(' ').take(n));
}
