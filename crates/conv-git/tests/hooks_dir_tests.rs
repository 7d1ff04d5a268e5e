//! Hooks directory resolution against real git repositories.
//!
//! These tests shell out to the `git` CLI to create linked worktrees.

use conv_git::{GitMarker, find_git_marker, resolve_hooks_dir};
use conv_test_utils::git::{
    add_linked_worktree, fake_git_dir, fake_git_pointer, real_git_repo, real_git_repo_with_commit,
    run_git,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn canonical(path: &Path) -> std::path::PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[test]
fn fake_git_dir_is_a_directory_marker() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());

    let marker = find_git_marker(temp.path()).unwrap();
    assert!(matches!(marker, GitMarker::Directory(_)));
    assert_eq!(marker.path(), temp.path().join(".git"));
}

#[test]
fn real_repository_uses_dot_git_hooks() {
    let temp = TempDir::new().unwrap();
    real_git_repo(temp.path());

    let hooks = resolve_hooks_dir(temp.path()).unwrap().unwrap();
    assert_eq!(hooks, temp.path().join(".git/hooks"));
}

#[test]
fn pointer_file_with_commondir_resolves_shared_hooks() {
    let temp = TempDir::new().unwrap();
    let common = temp.path().join("main/.git");
    let worktree_git = common.join("worktrees/feature");
    let project = temp.path().join("feature");
    fs::create_dir_all(&worktree_git).unwrap();
    fs::create_dir_all(&project).unwrap();
    fs::write(worktree_git.join("commondir"), "../..\n").unwrap();
    fake_git_pointer(&project, &worktree_git.to_string_lossy());

    let marker = find_git_marker(&project).unwrap();
    assert!(matches!(marker, GitMarker::PointerFile(_)));

    let hooks = resolve_hooks_dir(&project).unwrap().unwrap();
    assert_eq!(hooks, canonical(&common).join("hooks"));
}

#[test]
fn linked_worktree_resolves_hooks_of_main_repository() {
    let temp = TempDir::new().unwrap();
    let main = temp.path().join("main");
    let worktree = temp.path().join("feature");
    fs::create_dir_all(&main).unwrap();
    real_git_repo_with_commit(&main);
    add_linked_worktree(&main, &worktree, "feature");

    assert!(worktree.join(".git").is_file());

    let hooks = resolve_hooks_dir(&worktree).unwrap().unwrap();
    assert_eq!(hooks.file_name().unwrap(), "hooks");
    assert_eq!(
        canonical(hooks.parent().unwrap()),
        canonical(&main.join(".git"))
    );
}

#[test]
fn linked_worktree_honors_core_hooks_path() {
    let temp = TempDir::new().unwrap();
    let main = temp.path().join("main");
    let worktree = temp.path().join("feature");
    fs::create_dir_all(&main).unwrap();
    real_git_repo_with_commit(&main);
    run_git(&main, &["config", "core.hooksPath", ".githooks"]);
    add_linked_worktree(&main, &worktree, "feature");

    let hooks = resolve_hooks_dir(&worktree).unwrap().unwrap();
    assert_eq!(hooks.file_name().unwrap(), ".githooks");
    assert_eq!(canonical(hooks.parent().unwrap()), canonical(&worktree));
}
