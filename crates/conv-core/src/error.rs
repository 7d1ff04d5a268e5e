//! Error types for conv-core

use std::path::PathBuf;

/// Result type for conv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or materializing conventions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A boolean setting holds something other than `true`/`false`
    #[error("Property '{key}' must be 'true' or 'false', got '{value}'")]
    InvalidBoolean { key: String, value: String },

    /// A string setting is present but empty after trimming
    #[error("Property '{key}' must not be blank")]
    BlankValue { key: String },

    /// A required value is neither configured nor inferable
    #[error("Property '{key}' must be configured or {hint}")]
    MissingRequired { key: String, hint: String },

    /// Only part of an all-or-nothing group of settings is configured
    #[error("Properties {} must be configured together", quote_list(.keys))]
    IncompleteGroup { keys: Vec<String> },

    /// A bundled default resource is missing from the distribution
    #[error("Missing bundled resource at '{path}'")]
    MissingBundledResource { path: String },

    /// The project settings file holds a value that cannot be a setting
    #[error("Invalid setting '{key}' in {path}: {reason}")]
    InvalidSetting {
        path: PathBuf,
        key: String,
        reason: String,
    },

    /// A `-P key=value` override could not be parsed
    #[error("Invalid property override '{raw}': expected key=value")]
    InvalidOverride { raw: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from conv-fs
    #[error(transparent)]
    Fs(#[from] conv_fs::Error),

    /// Git error from conv-git
    #[error(transparent)]
    Git(#[from] conv_git::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error belongs to the configuration taxonomy (bad or
    /// missing settings, packaging defects) rather than an environment
    /// failure such as I/O.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBoolean { .. }
                | Self::BlankValue { .. }
                | Self::MissingRequired { .. }
                | Self::IncompleteGroup { .. }
                | Self::MissingBundledResource { .. }
                | Self::InvalidSetting { .. }
                | Self::InvalidOverride { .. }
        )
    }
}

/// `'a', 'b' and 'c'`
fn quote_list(keys: &[String]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{k}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
