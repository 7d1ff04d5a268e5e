//! Override-or-bundled file materialization
//!
//! A consumer project may replace any bundled default by placing a file at
//! the resource's override path. Materializing copies the override verbatim
//! when it exists and the bundled default otherwise.

use std::fmt;
use std::path::{Path, PathBuf};

use conv_fs::{ConventionPath, compute_bytes_checksum, io};
use serde::Serialize;

use crate::resources::{self, BundledResources};
use crate::{Error, Result};

/// The resource families the conventions materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceId {
    CheckstyleConfig,
    CheckstyleSuppressions,
    PreCommitHook,
}

impl ResourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckstyleConfig => "checkstyle-config",
            Self::CheckstyleSuppressions => "checkstyle-suppressions",
            Self::PreCommitHook => "pre-commit-hook",
        }
    }

    /// Where a consumer project places its replacement.
    pub fn override_location(&self) -> ConventionPath {
        match self {
            Self::CheckstyleConfig => ConventionPath::CheckstyleConfigOverride,
            Self::CheckstyleSuppressions => ConventionPath::CheckstyleSuppressionsOverride,
            Self::PreCommitHook => ConventionPath::PreCommitHookOverride,
        }
    }

    pub fn bundled_path(&self) -> &'static str {
        match self {
            Self::CheckstyleConfig => resources::CHECKSTYLE_CONFIG,
            Self::CheckstyleSuppressions => resources::CHECKSTYLE_SUPPRESSIONS,
            Self::PreCommitHook => resources::PRE_COMMIT_HOOK,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub id: ResourceId,
    pub override_path: Option<PathBuf>,
    pub bundled_path: String,
}

impl ResourceRequest {
    /// The standard request for `id` in the project at `project_dir`.
    pub fn for_project(id: ResourceId, project_dir: &Path) -> Self {
        Self {
            id,
            override_path: Some(id.override_location().under(project_dir)),
            bundled_path: id.bundled_path().to_string(),
        }
    }

    /// A request with no override, always served from bundled content.
    pub fn bundled_only(id: ResourceId) -> Self {
        Self {
            id,
            override_path: None,
            bundled_path: id.bundled_path().to_string(),
        }
    }
}

/// Where materialized content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum Origin {
    /// The consumer's override file
    Override(PathBuf),
    /// Bundled content, by lookup path
    Bundled(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override(path) => write!(f, "override {}", path.display()),
            Self::Bundled(path) => write!(f, "bundled {path}"),
        }
    }
}

/// Result of one materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub id: ResourceId,
    pub output: PathBuf,
    pub origin: Origin,
    /// `sha256:<hex>` of the written bytes
    pub checksum: String,
}

/// Writes resources to their output locations.
#[derive(Debug, Clone)]
pub struct ResourceMaterializer {
    resources: BundledResources,
}

impl Default for ResourceMaterializer {
    fn default() -> Self {
        Self::new(BundledResources::embedded())
    }
}

impl ResourceMaterializer {
    pub fn new(resources: BundledResources) -> Self {
        Self { resources }
    }

    /// Write the content for `request` to `output`.
    ///
    /// Parent directories are created and any existing output is replaced,
    /// so repeated calls with unchanged inputs produce the same file.
    pub fn materialize(&self, request: &ResourceRequest, output: &Path) -> Result<MaterializeReport> {
        let (content, origin) = self.content_for(request)?;
        io::write_atomic(output, &content)?;

        let checksum = compute_bytes_checksum(&content);
        tracing::info!(
            resource = %request.id,
            output = %output.display(),
            origin = %origin,
            "Materialized resource"
        );
        Ok(MaterializeReport {
            id: request.id,
            output: output.to_path_buf(),
            origin,
            checksum,
        })
    }

    fn content_for(&self, request: &ResourceRequest) -> Result<(Vec<u8>, Origin)> {
        if let Some(path) = request.override_path.as_deref().filter(|p| p.is_file()) {
            let content = io::read_bytes(path)?;
            return Ok((content, Origin::Override(path.to_path_buf())));
        }

        match self.resources.get(&request.bundled_path) {
            Some(content) => Ok((content.to_vec(), Origin::Bundled(request.bundled_path.clone()))),
            None => Err(Error::MissingBundledResource {
                path: request.bundled_path.clone(),
            }),
        }
    }
}

/// Output path of the generated Checkstyle configuration.
pub fn checkstyle_config_output(project_dir: &Path) -> PathBuf {
    ConventionPath::GeneratedCheckstyleDir
        .under(project_dir)
        .join("checkstyle.xml")
}

/// Output path of the generated Checkstyle suppressions.
pub fn checkstyle_suppressions_output(project_dir: &Path) -> PathBuf {
    ConventionPath::GeneratedCheckstyleDir
        .under(project_dir)
        .join("suppressions.xml")
}

/// Materialize the Checkstyle configuration and suppressions for a project.
pub fn write_checkstyle_config(
    project_dir: &Path,
    materializer: &ResourceMaterializer,
) -> Result<Vec<MaterializeReport>> {
    let config = materializer.materialize(
        &ResourceRequest::for_project(ResourceId::CheckstyleConfig, project_dir),
        &checkstyle_config_output(project_dir),
    )?;
    let suppressions = materializer.materialize(
        &ResourceRequest::for_project(ResourceId::CheckstyleSuppressions, project_dir),
        &checkstyle_suppressions_output(project_dir),
    )?;
    Ok(vec![config, suppressions])
}
