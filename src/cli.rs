use crate::listing::ListConfig;
use crate::render::{LayoutMode, RenderConfig};
use crate::terminal::stdout_is_terminal;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lsgrid",
    version,
    about = "List directory contents in columns, rows, or long format",
    after_help = "Examples:\n  lsgrid            grid listing of the current directory\n  lsgrid -l src     long listing of src\n  lsgrid -xR .      across layout, recursing into subdirectories"
)]
pub struct Args {
    /// Directories to list (default: current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Use the long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// List entries across rows instead of down columns
    #[arg(short = 'x')]
    pub across: bool,

    /// List one entry per line
    #[arg(short = '1')]
    pub one_per_line: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    pub recursive: bool,

    /// Include entries whose names start with '.'
    #[arg(short = 'a')]
    pub show_hidden: bool,

    /// Set by `validated` when color must stay off.
    #[arg(skip)]
    pub no_color: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var; never color into pipes or files
        if std::env::var_os("NO_COLOR").is_some() || !stdout_is_terminal() {
            self.no_color = true;
        }
        self
    }

    /// Selected layout; `-l` beats `-x`, which beats `-1`.
    pub fn layout_mode(&self) -> LayoutMode {
        if self.long {
            LayoutMode::Long
        } else if self.across {
            LayoutMode::Across
        } else if self.one_per_line {
            LayoutMode::SingleColumn
        } else {
            LayoutMode::Grid
        }
    }

    pub fn list_config(&self) -> ListConfig {
        ListConfig {
            show_hidden: self.show_hidden,
            recursive: self.recursive,
        }
    }

    pub fn render_config(&self, terminal_width: usize) -> RenderConfig {
        RenderConfig {
            mode: self.layout_mode(),
            use_color: !self.no_color,
            terminal_width,
        }
    }

    /// Whether each listing is introduced by its path.
    pub fn shows_section_headers(&self) -> bool {
        self.paths.len() > 1
    }
}
