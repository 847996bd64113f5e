#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use lsgrid::cli::Args;
use lsgrid::listing::{WalkdirReader, Walker};
use lsgrid::render::sanitize_terminal_text;
use lsgrid::{terminal, PROGRAM_NAME};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter.
const LOG_ENV: &str = "LSGRID_LOG";

fn main() {
    let args = Args::parse().validated();
    init_tracing();

    match run_app(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) if is_broken_pipe(&e) => {}
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr and stay off unless `LSGRID_LOG` asks for them.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// List every requested path. Returns `false` when any directory could not
/// be read.
fn run_app(args: &Args) -> Result<bool> {
    let list_config = args.list_config();
    let render_config = args.render_config(terminal::terminal_width());
    tracing::debug!(?list_config, ?render_config, paths = args.paths.len(), "starting");

    let reader = WalkdirReader;
    let walker = Walker::new(&reader, &list_config, &render_config);
    let mut out = terminal::buffered_stdout();
    let mut err = io::stderr().lock();
    let mut clean = true;

    for (i, path) in args.paths.iter().enumerate() {
        if args.shows_section_headers() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}:", sanitize_terminal_text(&path.to_string_lossy()))?;
        }
        let outcome = walker
            .walk(path, &mut out, &mut err)
            .with_context(|| format!("{}: failed to write listing", path.display()))?;
        clean &= outcome.is_clean();
    }

    out.flush().context("failed to flush output")?;
    Ok(clean)
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}
