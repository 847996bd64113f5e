//! lsgrid: directory listings in grid, across, long and recursive layouts.

#![forbid(unsafe_code)]

pub mod classify;
pub mod cli;
pub mod error;
pub mod layout;
pub mod listing;
pub mod metadata;
pub mod render;
pub mod terminal;

/// Prefix for every diagnostic written to stderr.
pub const PROGRAM_NAME: &str = "lsgrid";
