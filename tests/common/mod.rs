#![allow(dead_code)]

use assert_cmd::Command;
use lsgrid::listing::ListConfig;
use lsgrid::render::{LayoutMode, RenderConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// ListConfig without hidden entries or recursion.
pub fn default_list_config() -> ListConfig {
    ListConfig {
        show_hidden: false,
        recursive: false,
    }
}

/// RenderConfig with color disabled.
pub fn no_color_render_config(mode: LayoutMode, width: usize) -> RenderConfig {
    RenderConfig {
        mode,
        use_color: false,
        terminal_width: width,
    }
}

/// RenderConfig with color enabled.
pub fn color_render_config(mode: LayoutMode, width: usize) -> RenderConfig {
    RenderConfig {
        mode,
        use_color: true,
        terminal_width: width,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Set permission bits on an existing path.
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// The binary with a fixed width and no diagnostic logging.
pub fn lsgrid() -> Command {
    let mut cmd = Command::cargo_bin("lsgrid").unwrap();
    cmd.env("COLUMNS", "80")
        .env_remove("LSGRID_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Run the binary and return its stdout; the run must succeed.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "lsgrid failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
