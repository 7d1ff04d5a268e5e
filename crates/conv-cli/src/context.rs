//! Project context shared by the commands

use std::path::{Path, PathBuf};

use conv_core::ConventionsResolver;
use conv_core::config::Environment;

use crate::error::{CliError, Result};

/// The project a command runs against.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_dir: PathBuf,
    overrides: Vec<String>,
}

impl ProjectContext {
    /// Canonicalize `project_dir` and keep the `-P` overrides.
    pub fn new(project_dir: &Path, overrides: Vec<String>) -> Result<Self> {
        let project_dir = dunce::canonicalize(project_dir).map_err(|_| {
            CliError::user(format!(
                "Project directory '{}' does not exist",
                project_dir.display()
            ))
        })?;
        if !project_dir.is_dir() {
            return Err(CliError::user(format!(
                "Project directory '{}' is not a directory",
                project_dir.display()
            )));
        }
        Ok(Self {
            project_dir,
            overrides,
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// A resolver over the process environment and the project settings.
    pub fn resolver(&self) -> Result<ConventionsResolver> {
        tracing::debug!(
            project = %self.project_dir.display(),
            overrides = self.overrides.len(),
            "Building conventions resolver"
        );
        Ok(ConventionsResolver::load(
            &self.project_dir,
            Environment::capture(),
            &self.overrides,
        )?)
    }
}
