//! Error types for conv-git

use std::path::PathBuf;

/// Result type for conv-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conv-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] conv_fs::Error),

    #[error("Malformed git pointer file at {path}: expected a 'gitdir:' line")]
    MalformedPointer { path: PathBuf },
}
