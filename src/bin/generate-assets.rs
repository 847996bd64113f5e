#![forbid(unsafe_code)]

//! Writes shell completions and the man page for `lsgrid`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use lsgrid::cli::Args;
use lsgrid::PROGRAM_NAME;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Generate lsgrid shell completions and man page")]
struct AssetArgs {
    /// Directory receiving `completions/` and `man/`
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let args = AssetArgs::parse();
    write_completions(&args.out_dir.join("completions"))?;
    write_man_page(&args.out_dir.join("man"))?;
    Ok(())
}

fn write_completions(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    for shell in Shell::value_variants() {
        let path = generate_to(*shell, &mut Args::command(), PROGRAM_NAME, dir)
            .with_context(|| format!("writing {shell} completions"))?;
        tracing::info!(path = %path.display(), "completion written");
    }
    Ok(())
}

fn write_man_page(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let path = dir.join(format!("{PROGRAM_NAME}.1"));
    fs::write(&path, page).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "man page written");
    Ok(())
}
