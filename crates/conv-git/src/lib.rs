//! Git repository layout helpers for the Java conventions resolver
//!
//! Locates the git marker of a project and the directory git reads hooks
//! from, covering plain clones and linked worktrees whose `.git` is a
//! pointer file.

pub mod error;
pub mod hooks_dir;

pub use error::{Error, Result};
pub use hooks_dir::{GitMarker, find_git_marker, resolve_hooks_dir};
