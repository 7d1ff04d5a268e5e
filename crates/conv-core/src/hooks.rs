//! Pre-commit hook installation

use std::path::{Path, PathBuf};

use conv_fs::{ConventionPath, io};
use serde::Serialize;

use crate::materialize::{MaterializeReport, ResourceId, ResourceMaterializer, ResourceRequest};
use crate::Result;

const PRE_COMMIT: &str = "pre-commit";

/// What [`install_pre_commit_hook`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HookInstallOutcome {
    Installed(MaterializeReport),
    /// The project root has no `.git` marker
    SkippedNoGit,
}

/// Install the pre-commit hook into the project's hooks directory.
///
/// `scripts/git-hooks/pre-commit` replaces the bundled hook when present.
/// The installed file is made executable.
pub fn install_pre_commit_hook(
    project_dir: &Path,
    materializer: &ResourceMaterializer,
) -> Result<HookInstallOutcome> {
    let Some(hooks_dir) = hooks_dir(project_dir)? else {
        tracing::warn!(
            project = %project_dir.display(),
            "No git repository found; skipping hook installation"
        );
        return Ok(HookInstallOutcome::SkippedNoGit);
    };

    let output = hooks_dir.join(PRE_COMMIT);
    let request = ResourceRequest::for_project(ResourceId::PreCommitHook, project_dir);
    let report = materializer.materialize(&request, &output)?;
    io::set_executable(&output)?;

    Ok(HookInstallOutcome::Installed(report))
}

fn hooks_dir(project_dir: &Path) -> Result<Option<PathBuf>> {
    match conv_git::resolve_hooks_dir(project_dir) {
        Ok(dir) => Ok(dir),
        Err(conv_git::Error::MalformedPointer { path }) => {
            let fallback = ConventionPath::GitMarker.under(project_dir).join("hooks");
            tracing::warn!(
                pointer = %path.display(),
                fallback = %fallback.display(),
                "Could not follow git pointer file; using default hooks directory"
            );
            Ok(Some(fallback))
        }
        Err(e) => Err(e.into()),
    }
}
