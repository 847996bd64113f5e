//! Terminal queries: output width, whether stdout is a terminal, and the
//! buffered stdout writer.

use crate::layout::FALLBACK_WIDTH;
use crossterm::terminal;
use std::io::{self, IsTerminal, Stdout};

/// Width to lay listings out in: `COLUMNS` when set to a positive number,
/// otherwise the terminal's reported width, otherwise 80.
pub fn terminal_width() -> usize {
    let columns = std::env::var("COLUMNS").ok();
    let queried = terminal::size().ok().map(|(cols, _)| cols);
    resolve_width(columns.as_deref(), queried)
}

/// Pick a width from the `COLUMNS` value and the queried terminal size.
pub fn resolve_width(columns_env: Option<&str>, queried: Option<u16>) -> usize {
    let from_env = columns_env
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0);
    if let Some(width) = from_env {
        return width;
    }
    match queried {
        Some(cols) if cols > 0 => usize::from(cols),
        _ => FALLBACK_WIDTH,
    }
}

pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> io::BufWriter<Stdout> {
    io::BufWriter::with_capacity(64 * 1024, io::stdout())
}
