//! The resolved convention configuration for one project
//!
//! [`ConventionsResolver`] composes the property resolver, owner inference,
//! package detection and field-group validation into a single
//! [`ResolvedConventions`] value. Results of inference are memoized on the
//! resolver instance; nothing is written back into the project settings.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use conv_fs::ConventionPath;
use secrecy::SecretString;
use serde::{Serialize, Serializer};

use crate::config::keys::{self, ConfigKey, KeyDefault};
use crate::config::{
    Environment, FieldGroup, Layer, ProjectSettings, PropertyResolver, PropertyStore,
    ResolvedValue,
};
use crate::detect::detect_base_packages;
use crate::materialize::{checkstyle_config_output, checkstyle_suppressions_output};
use crate::owner::infer_owner;
use crate::{Error, Result};

const BASE_PACKAGE_HINT: &str =
    "at least one Java package declaration must be discoverable under src/main/java";
const REDACTED: &str = "<redacted>";

const DEVELOPER: FieldGroup<3> = FieldGroup::new([
    keys::PUBLISHING_DEVELOPER_ID,
    keys::PUBLISHING_DEVELOPER_NAME,
    keys::PUBLISHING_DEVELOPER_URL,
]);

/// Name of the GitHub Packages repository in publication descriptors.
pub const GITHUB_PACKAGES_REPOSITORY: &str = "GitHubPackages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub group: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl License {
    pub fn mit() -> Self {
        Self {
            name: "The MIT License".to_string(),
            url: "https://opensource.org/licenses/MIT".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scm {
    pub url: String,
    pub connection: String,
    pub developer_connection: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Credentials for GitHub Packages. The key never appears in output.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: Option<String>,
    #[serde(serialize_with = "redact")]
    pub password: Option<SecretString>,
}

#[derive(Debug, Serialize)]
pub struct GithubPackagesRepository {
    pub name: &'static str,
    pub url: String,
    pub credentials: Credentials,
}

/// Publication descriptor values.
#[derive(Debug, Serialize)]
pub struct Publication {
    pub pom_name: String,
    pub pom_description: String,
    pub license: License,
    /// Repository URL; known only with an owner
    pub url: Option<String>,
    pub scm: Option<Scm>,
    pub developer: Option<Developer>,
    pub github_packages: Option<GithubPackagesRepository>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckstylePaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub suppressions_file: PathBuf,
}

/// Every resolved convention value for one project.
#[derive(Debug, Serialize)]
pub struct ResolvedConventions {
    pub project_dir: PathBuf,
    pub project: ProjectInfo,
    pub maven_central_enabled: bool,
    pub publishing_enabled: bool,
    pub github_owner: Option<String>,
    /// Absent when publishing is disabled
    pub publication: Option<Publication>,
    pub base_packages: Vec<String>,
    /// Comma-joined base packages for NullAway's `AnnotatedPackages`
    pub annotated_packages: String,
    pub checkstyle: CheckstylePaths,
}

/// One line of [`ConventionsResolver::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub key: &'static str,
    pub value: Option<String>,
    /// `None` when no layer supplies a value
    pub source: Option<Layer>,
    /// Why this key could not be resolved; the other keys are still reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug)]
struct ResolvedProject {
    name: ResolvedValue<String>,
    group: Option<ResolvedValue<String>>,
    description: ResolvedValue<String>,
}

/// Resolves [`ResolvedConventions`] for a project directory.
///
/// Single-threaded and scoped to one snapshot of environment, settings and
/// source tree. Build a new resolver to observe changes.
#[derive(Debug)]
pub struct ConventionsResolver {
    project_dir: PathBuf,
    resolver: PropertyResolver,
    project: OnceCell<ResolvedProject>,
    owner: OnceCell<Option<ResolvedValue<String>>>,
    base_packages: OnceCell<ResolvedValue<Vec<String>>>,
}

impl ConventionsResolver {
    pub fn new(project_dir: impl Into<PathBuf>, env: Environment, settings: ProjectSettings) -> Self {
        Self {
            project_dir: project_dir.into(),
            resolver: PropertyResolver::new(PropertyStore::new(env, settings)),
            project: OnceCell::new(),
            owner: OnceCell::new(),
            base_packages: OnceCell::new(),
        }
    }

    /// Load `conventions.toml` from `project_dir`, apply `key=value`
    /// overrides on top and build a resolver over `env`.
    pub fn load<S: AsRef<str>>(
        project_dir: impl Into<PathBuf>,
        env: Environment,
        overrides: &[S],
    ) -> Result<Self> {
        let project_dir = project_dir.into();
        let settings = ProjectSettings::load(&project_dir)?.with_overrides(overrides)?;
        Ok(Self::new(project_dir, env, settings))
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn properties(&self) -> &PropertyResolver {
        &self.resolver
    }

    /// Resolve everything.
    pub fn resolve(&self) -> Result<ResolvedConventions> {
        let project = self.project_info()?;
        let maven_central_enabled = self.maven_central_enabled()?.value;
        let publishing_enabled = self.publishing_enabled()?.value;
        let github_owner = self.github_owner()?.as_ref().map(|owner| owner.value.clone());
        let publication = if publishing_enabled {
            Some(self.publication()?)
        } else {
            tracing::debug!("Publishing disabled; skipping publication settings");
            None
        };
        let base_packages = self.base_packages()?.value.clone();
        let annotated_packages = base_packages.join(",");

        Ok(ResolvedConventions {
            project_dir: self.project_dir.clone(),
            project,
            maven_central_enabled,
            publishing_enabled,
            github_owner,
            publication,
            base_packages,
            annotated_packages,
            checkstyle: self.checkstyle_paths(),
        })
    }

    pub fn maven_central_enabled(&self) -> Result<ResolvedValue<bool>> {
        self.resolve_flag(&keys::MAVEN_CENTRAL_ENABLED)
    }

    pub fn publishing_enabled(&self) -> Result<ResolvedValue<bool>> {
        self.resolve_flag(&keys::PUBLISHING_ENABLED)
    }

    fn resolve_flag(&self, key: &ConfigKey) -> Result<ResolvedValue<bool>> {
        let default = matches!(key.default, KeyDefault::Flag(true));
        self.resolver.resolve_boolean(key, default)
    }

    pub fn project_info(&self) -> Result<ProjectInfo> {
        let project = self.project()?;
        Ok(ProjectInfo {
            name: project.name.value.clone(),
            group: project.group.as_ref().map(|group| group.value.clone()),
            description: project.description.value.clone(),
        })
    }

    fn project(&self) -> Result<&ResolvedProject> {
        if let Some(project) = self.project.get() {
            return Ok(project);
        }

        let name = match self.resolver.resolve_string(&keys::PROJECT_NAME)? {
            Some(name) => name,
            None => {
                let dir_name = self
                    .project_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .ok_or_else(|| Error::MissingRequired {
                        key: keys::PROJECT_NAME.name.to_string(),
                        hint: "the project directory must have a name".to_string(),
                    })?;
                ResolvedValue::new(dir_name, Layer::Inferred)
            }
        };
        let group = self.resolver.resolve_string(&keys::PROJECT_GROUP)?;
        let description = match self.resolver.resolve_string(&keys::PROJECT_DESCRIPTION)? {
            Some(description) => description,
            None => ResolvedValue::new(name.value.clone(), Layer::Inferred),
        };

        let project = ResolvedProject {
            name,
            group,
            description,
        };
        Ok(self.project.get_or_init(|| project))
    }

    /// The GitHub owner: configured, else inferred from the project group.
    pub fn github_owner(&self) -> Result<&Option<ResolvedValue<String>>> {
        if let Some(owner) = self.owner.get() {
            return Ok(owner);
        }

        let owner = match self.resolver.resolve_string(&keys::PUBLISHING_GITHUB_OWNER)? {
            Some(owner) => Some(owner),
            None => {
                let group = self.project()?.group.as_ref().map(|g| g.value.as_str());
                let inferred = infer_owner(group);
                if let Some(owner) = &inferred {
                    tracing::debug!(owner = %owner, "Inferred GitHub owner from project group");
                }
                inferred.map(|owner| ResolvedValue::new(owner, Layer::Inferred))
            }
        };
        Ok(self.owner.get_or_init(|| owner))
    }

    /// Developer identity; explicit fields must be configured together.
    ///
    /// Without explicit fields the owner supplies id, name and profile URL.
    pub fn developer(&self) -> Result<Option<Developer>> {
        if let Some([id, name, url]) = DEVELOPER.resolve(&self.resolver)? {
            return Ok(Some(Developer { id, name, url }));
        }
        Ok(self.github_owner()?.as_ref().map(|owner| Developer {
            id: owner.value.clone(),
            name: owner.value.clone(),
            url: format!("https://github.com/{}", owner.value),
        }))
    }

    pub fn publication(&self) -> Result<Publication> {
        let project = self.project()?;
        let repository = &project.name.value;
        let owner = self.github_owner()?.as_ref().map(|owner| owner.value.as_str());

        let url = owner.map(|owner| format!("https://github.com/{owner}/{repository}"));
        let scm = owner.zip(url.as_deref()).map(|(owner, url)| Scm {
            url: url.to_string(),
            connection: format!("scm:git:{url}.git"),
            developer_connection: format!("scm:git:ssh://git@github.com/{owner}/{repository}.git"),
        });
        let github_packages = match owner {
            Some(owner) => Some(GithubPackagesRepository {
                name: GITHUB_PACKAGES_REPOSITORY,
                url: format!("https://maven.pkg.github.com/{owner}/{repository}"),
                credentials: self.credentials()?,
            }),
            None => None,
        };

        Ok(Publication {
            pom_name: project.name.value.clone(),
            pom_description: project.description.value.clone(),
            license: License::mit(),
            url,
            scm,
            developer: self.developer()?,
            github_packages,
        })
    }

    fn credentials(&self) -> Result<Credentials> {
        let username = self
            .resolver
            .resolve_string(&keys::GITHUB_PACKAGES_USER)?
            .map(ResolvedValue::into_value);
        let password = self
            .resolver
            .resolve_string(&keys::GITHUB_PACKAGES_KEY)?
            .map(|key| SecretString::from(key.into_value()));
        Ok(Credentials { username, password })
    }

    /// Root packages: configured (comma-separated) or detected from sources.
    pub fn base_packages(&self) -> Result<&ResolvedValue<Vec<String>>> {
        if let Some(packages) = self.base_packages.get() {
            return Ok(packages);
        }

        let packages = match self.resolver.resolve_string(&keys::BASE_PACKAGE)? {
            Some(configured) => {
                let packages = configured
                    .value
                    .split(',')
                    .map(str::trim)
                    .filter(|package| !package.is_empty())
                    .map(str::to_string)
                    .collect();
                ResolvedValue::new(packages, configured.layer)
            }
            None => {
                let detected = detect_base_packages(&self.project_dir);
                if detected.is_empty() {
                    return Err(Error::MissingRequired {
                        key: keys::BASE_PACKAGE.name.to_string(),
                        hint: BASE_PACKAGE_HINT.to_string(),
                    });
                }
                tracing::info!(
                    "Inferred '{}={}' from source packages under {}",
                    keys::BASE_PACKAGE.name,
                    detected.join(","),
                    ConventionPath::JavaSourceRoot.as_str()
                );
                ResolvedValue::new(detected, Layer::Inferred)
            }
        };
        Ok(self.base_packages.get_or_init(|| packages))
    }

    pub fn checkstyle_paths(&self) -> CheckstylePaths {
        CheckstylePaths {
            config_dir: ConventionPath::GeneratedCheckstyleDir.under(&self.project_dir),
            config_file: checkstyle_config_output(&self.project_dir),
            suppressions_file: checkstyle_suppressions_output(&self.project_dir),
        }
    }

    /// Each known key with its resolved value and supplying layer.
    ///
    /// Values of secret keys are redacted. A key that fails to resolve
    /// carries its error instead of a value.
    pub fn explain(&self) -> Vec<Explanation> {
        keys::ALL_KEYS
            .iter()
            .map(|key| match self.explain_key(key) {
                Ok((value, source)) => Explanation {
                    key: key.name,
                    value,
                    source,
                    error: None,
                },
                Err(e) => {
                    tracing::debug!(key = key.name, error = %e, "Key failed to resolve");
                    Explanation {
                        key: key.name,
                        value: None,
                        source: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }

    fn explain_key(&self, key: &ConfigKey) -> Result<(Option<String>, Option<Layer>)> {
        let found = |resolved: Option<ResolvedValue<String>>| match resolved {
            Some(resolved) => (Some(resolved.value), Some(resolved.layer)),
            None => (None, None),
        };

        Ok(match key.name {
            name if name == keys::MAVEN_CENTRAL_ENABLED.name
                || name == keys::PUBLISHING_ENABLED.name =>
            {
                let flag = self.resolve_flag(key)?;
                (Some(flag.value.to_string()), Some(flag.layer))
            }
            name if name == keys::PUBLISHING_GITHUB_OWNER.name => found(self.github_owner()?.clone()),
            name if name == keys::BASE_PACKAGE.name => {
                let packages = self.base_packages()?;
                (Some(packages.value.join(",")), Some(packages.layer.clone()))
            }
            name if name == keys::GITHUB_PACKAGES_KEY.name => {
                let token = self.resolver.resolve_string(key)?;
                (token.as_ref().map(|_| REDACTED.to_string()), token.map(|t| t.layer))
            }
            name if name == keys::PROJECT_NAME.name => {
                found(Some(self.project()?.name.clone()))
            }
            name if name == keys::PROJECT_GROUP.name => found(self.project()?.group.clone()),
            name if name == keys::PROJECT_DESCRIPTION.name => {
                found(Some(self.project()?.description.clone()))
            }
            name if DEVELOPER.keys().iter().any(|k| k.name == name) => {
                self.explain_developer_field(key)?
            }
            _ => found(self.resolver.resolve_string(key)?),
        })
    }

    fn explain_developer_field(&self, key: &ConfigKey) -> Result<(Option<String>, Option<Layer>)> {
        if let Some(configured) = self.resolver.resolve_string(key)? {
            // Surface partial groups here rather than showing half a developer
            DEVELOPER.resolve(&self.resolver)?;
            return Ok((Some(configured.value), Some(configured.layer)));
        }
        let developer = self.developer()?;
        let value = developer.map(|developer| match key.name {
            name if name == keys::PUBLISHING_DEVELOPER_ID.name => developer.id,
            name if name == keys::PUBLISHING_DEVELOPER_NAME.name => developer.name,
            _ => developer.url,
        });
        let source = value.as_ref().map(|_| Layer::Inferred);
        Ok((value, source))
    }
}

fn redact<S: Serializer>(secret: &Option<SecretString>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match secret {
        Some(_) => serializer.serialize_some(REDACTED),
        None => serializer.serialize_none(),
    }
}
