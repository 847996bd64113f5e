mod common;

use common::{create_fixture, default_list_config, lsgrid, no_color_render_config, stdout_of};
use lsgrid::listing::{discover_children, ListConfig, WalkdirReader, Walker};
use lsgrid::render::LayoutMode;
use predicates::prelude::*;
use std::path::Path;

fn walk_visited(root: &Path, list: &ListConfig) -> Vec<std::path::PathBuf> {
    let render = no_color_render_config(LayoutMode::SingleColumn, 80);
    let mut out = Vec::new();
    let mut err = Vec::new();
    Walker::new(&WalkdirReader, list, &render)
        .walk(root, &mut out, &mut err)
        .unwrap()
        .visited
}

fn recursive() -> ListConfig {
    ListConfig {
        recursive: true,
        ..default_list_config()
    }
}

#[test]
fn test_recursive_walk_enters_plain_and_hidden_dirs_without_looping() {
    let tmp = create_fixture(&["a/", "b.txt", ".hidden/"]);
    let root = tmp.path();
    let visited = walk_visited(root, &recursive());

    assert!(visited.contains(&root.join("a")));
    assert!(visited.contains(&root.join(".hidden")));
    assert_eq!(visited.iter().filter(|p| p.as_path() == root).count(), 1);
    assert!(visited
        .iter()
        .all(|p| !p.ends_with(".") && !p.ends_with("..")));
}

#[test]
fn test_every_subdirectory_visited_exactly_once() {
    let tmp = create_fixture(&[
        "src/",
        "src/bin/",
        "src/lib/",
        "src/lib/deep/",
        "docs/",
        ".git/",
        ".git/objects/",
        "README",
    ]);
    let root = tmp.path();
    let visited = walk_visited(root, &recursive());
    let expected = [
        root.to_path_buf(),
        root.join(".git"),
        root.join(".git/objects"),
        root.join("docs"),
        root.join("src"),
        root.join("src/bin"),
        root.join("src/lib"),
        root.join("src/lib/deep"),
    ];
    assert_eq!(visited, expected);
}

#[test]
fn test_discovery_returns_child_paths_without_output() {
    let tmp = create_fixture(&["z/", "y.txt", ".x/"]);
    let children = discover_children(&WalkdirReader, tmp.path()).unwrap();
    assert_eq!(children, vec![tmp.path().join(".x"), tmp.path().join("z")]);
}

#[test]
fn test_recursive_empty_subdirectory_scenario() {
    let tmp = create_fixture(&["sub/"]);
    let out = stdout_of(lsgrid().arg("-R").arg(tmp.path()));
    assert_eq!(out, format!("sub\n\n{}:\n", tmp.path().join("sub").display()));
}

#[test]
fn test_recursive_headers_precede_child_listings() {
    let tmp = create_fixture(&["a/", "a/one", "a/two", "b/", "b/three", "top"]);
    let root = tmp.path();
    let out = stdout_of(lsgrid().arg("-R").arg("-1").arg(root));
    let expected = format!(
        "a\nb\ntop\n\n{}:\none\ntwo\n\n{}:\nthree\n",
        root.join("a").display(),
        root.join("b").display()
    );
    assert_eq!(out, expected);
}

#[test]
fn test_recursive_relative_paths_are_joined() {
    let tmp = create_fixture(&["sub/", "sub/inner/", "sub/inner/leaf"]);
    let out = stdout_of(lsgrid().current_dir(tmp.path()).arg("-R"));
    assert_eq!(out, "sub\n\n./sub:\ninner\n\n./sub/inner:\nleaf\n");
}

#[test]
fn test_recursive_long_mode() {
    let tmp = create_fixture(&["d/", "d/f"]);
    let out = stdout_of(lsgrid().args(["-l", "-R"]).arg(tmp.path()));
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with('d') && lines[0].ends_with(" d"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], format!("{}:", tmp.path().join("d").display()));
    assert!(lines[3].starts_with('-') && lines[3].ends_with(" f"));
}

#[test]
fn test_recursive_symlink_loop_terminates() {
    let tmp = create_fixture(&["a/"]);
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("a").join("back")).unwrap();
    lsgrid()
        .arg("-R")
        .arg(tmp.path())
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("back"))
        .stdout(predicate::str::contains("back:").not());
}

#[test]
fn test_without_recursion_no_headers() {
    let tmp = create_fixture(&["sub/", "sub/inner"]);
    let out = stdout_of(lsgrid().arg(tmp.path()));
    assert_eq!(out, "sub\n");
}
