//! Git fixtures at three realism levels.
//!
//! Choose the lowest-realism fixture that satisfies the test.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Creates a bare `.git` directory without any git object store.
///
/// Realism level: **FAKE**: enough for marker detection only.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git/hooks"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git/hooks: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Writes a `.git` pointer file at `path` targeting `gitdir`.
///
/// Realism level: **FAKE**: git itself will not accept the target unless
/// it is a real git directory.
///
/// # Panics
/// Panics if the pointer cannot be written.
pub fn fake_git_pointer(path: &Path, gitdir: &str) {
    fs::write(path.join(".git"), format!("gitdir: {gitdir}\n"))
        .unwrap_or_else(|e| panic!("fake_git_pointer: failed to write .git: {e}"));
}

/// Initialises a real git repository using `git2`, without history.
///
/// Realism level: **REAL**.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real repository with one commit on `main` using the `git` CLI.
///
/// Realism level: **REAL WITH HISTORY**: required before linked worktrees
/// can be added.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    run_git(path, &["init"]);
    run_git(path, &["config", "user.email", "test@test.com"]);
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);
    // Older git versions may not support renaming the unborn default
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Adds a linked worktree of `repo` at `worktree` on a new branch `branch`.
///
/// The worktree's `.git` is a pointer file into `<repo>/.git/worktrees/`.
///
/// # Panics
/// Panics if `git worktree add` fails.
pub fn add_linked_worktree(repo: &Path, worktree: &Path, branch: &str) {
    let worktree_arg = worktree.to_string_lossy().into_owned();
    run_git(repo, &["worktree", "add", "-b", branch, &worktree_arg]);
}

/// Runs `git` with `args` in `dir`, panicking with stderr on failure.
///
/// # Panics
/// Panics if git cannot be spawned or exits non-zero.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("run_git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "run_git: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
