//! Hooks directory resolution
//!
//! A project's `.git` is either the git database itself or, for linked
//! worktrees and submodules, a pointer file (`gitdir: <path>`). Hooks of a
//! linked worktree live in the shared common directory, not in the
//! per-worktree git directory.

use std::path::{Path, PathBuf};

use conv_fs::{ConventionPath, io};
use git2::Repository;

use crate::{Error, Result};

const GITDIR_PREFIX: &str = "gitdir:";
const COMMONDIR_FILE: &str = "commondir";
const HOOKS_DIR: &str = "hooks";

/// The git marker found at a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitMarker {
    /// `.git` is the git database
    Directory(PathBuf),
    /// `.git` is a pointer file to a git directory elsewhere
    PointerFile(PathBuf),
}

impl GitMarker {
    /// Path of the marker itself.
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::PointerFile(path) => path,
        }
    }
}

/// Find the git marker directly under `project_root`.
///
/// Only the root itself is inspected; parent directories are not searched.
pub fn find_git_marker(project_root: &Path) -> Option<GitMarker> {
    let marker = ConventionPath::GitMarker.under(project_root);
    if marker.is_dir() {
        Some(GitMarker::Directory(marker))
    } else if marker.is_file() {
        Some(GitMarker::PointerFile(marker))
    } else {
        None
    }
}

/// Resolve the directory git runs hooks from for `project_root`.
///
/// Returns `Ok(None)` when the project has no git marker.
///
/// - `.git` directory: `.git/hooks`
/// - `.git` pointer file: `core.hooksPath` if configured, otherwise
///   `<commondir>/hooks`, read through git2 when the repository opens and
///   from the pointer file itself when it does not
pub fn resolve_hooks_dir(project_root: &Path) -> Result<Option<PathBuf>> {
    let Some(marker) = find_git_marker(project_root) else {
        tracing::debug!(root = %project_root.display(), "No git marker found");
        return Ok(None);
    };

    let hooks_dir = match marker {
        GitMarker::Directory(git_dir) => git_dir.join(HOOKS_DIR),
        GitMarker::PointerFile(pointer) => match hooks_dir_from_repository(project_root) {
            Some(dir) => dir,
            None => hooks_dir_from_pointer(project_root, &pointer)?,
        },
    };

    tracing::debug!(hooks_dir = %hooks_dir.display(), "Resolved hooks directory");
    Ok(Some(hooks_dir))
}

/// Ask git2 for the hooks directory of a linked worktree.
fn hooks_dir_from_repository(project_root: &Path) -> Option<PathBuf> {
    let repo = match Repository::open(project_root) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::debug!(error = %e, "git2 could not open repository; parsing pointer file");
            return None;
        }
    };

    let configured = repo
        .config()
        .ok()
        .and_then(|config| config.get_path("core.hooksPath").ok());
    if let Some(path) = configured {
        let base = repo.workdir().unwrap_or(project_root);
        return Some(if path.is_absolute() {
            path
        } else {
            base.join(path)
        });
    }

    Some(repo.commondir().join(HOOKS_DIR))
}

/// Follow `gitdir:` and the optional `commondir` file by hand.
fn hooks_dir_from_pointer(project_root: &Path, pointer: &Path) -> Result<PathBuf> {
    let content = io::read_text(pointer)?;
    let target = content
        .lines()
        .find_map(|line| line.trim().strip_prefix(GITDIR_PREFIX))
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .ok_or_else(|| Error::MalformedPointer {
            path: pointer.to_path_buf(),
        })?;

    let git_dir = absolutize(project_root, Path::new(target));

    let commondir_file = git_dir.join(COMMONDIR_FILE);
    let common_dir = if commondir_file.is_file() {
        let common = io::read_text(&commondir_file)?;
        absolutize(&git_dir, Path::new(common.trim()))
    } else {
        git_dir
    };

    Ok(common_dir.join(HOOKS_DIR))
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    dunce::canonicalize(&joined).unwrap_or(joined)
}
