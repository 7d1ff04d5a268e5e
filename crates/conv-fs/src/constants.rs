//! Well-known paths used by the conventions, relative to a project root.

use std::path::{Path, PathBuf};

/// Filesystem locations the conventions read from or write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionPath {
    /// Project-level settings file (`conventions.toml`)
    SettingsFile,
    /// Main Java source root scanned for package declarations
    JavaSourceRoot,
    /// Build output directory
    BuildDir,
    /// Directory receiving the generated Checkstyle files
    GeneratedCheckstyleDir,
    /// Consumer Checkstyle configuration override
    CheckstyleConfigOverride,
    /// Consumer Checkstyle suppressions override
    CheckstyleSuppressionsOverride,
    /// Consumer pre-commit hook override
    PreCommitHookOverride,
    /// The `.git` marker (directory, or pointer file in linked worktrees)
    GitMarker,
}

impl ConventionPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SettingsFile => "conventions.toml",
            Self::JavaSourceRoot => "src/main/java",
            Self::BuildDir => "build",
            Self::GeneratedCheckstyleDir => "build/generated/checkstyle",
            Self::CheckstyleConfigOverride => "config/checkstyle/checkstyle.xml",
            Self::CheckstyleSuppressionsOverride => "config/checkstyle/suppressions.xml",
            Self::PreCommitHookOverride => "scripts/git-hooks/pre-commit",
            Self::GitMarker => ".git",
        }
    }

    /// Resolve this path against a project root.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(self.as_str())
    }
}

impl AsRef<Path> for ConventionPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ConventionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
