//! The configuration keys understood by the conventions
//!
//! Each key has a stable canonical name (looked up in project settings) and
//! an ordered list of environment variable aliases.

use std::fmt;

/// How a key behaves when no layer supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefault {
    /// A fixed boolean default
    Flag(bool),
    /// Absent unless configured
    Absent,
    /// Inferred by the aggregator; the hint describes from what
    Computed(&'static str),
}

impl fmt::Display for KeyDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Absent => write!(f, "(absent)"),
            Self::Computed(hint) => write!(f, "(inferred from {hint})"),
        }
    }
}

/// A single named setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    /// Canonical dot-separated name
    pub name: &'static str,
    /// Environment variables checked in order; the first present one wins
    pub env_aliases: &'static [&'static str],
    /// Behavior when nothing is configured
    pub default: KeyDefault,
}

impl ConfigKey {
    pub const fn new(
        name: &'static str,
        env_aliases: &'static [&'static str],
        default: KeyDefault,
    ) -> Self {
        Self {
            name,
            env_aliases,
            default,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const MAVEN_CENTRAL_ENABLED: ConfigKey = ConfigKey::new(
    "repositories.mavenCentral.enabled",
    &["JAVA_CONVENTIONS_MAVEN_CENTRAL_ENABLED"],
    KeyDefault::Flag(true),
);

pub const PUBLISHING_ENABLED: ConfigKey = ConfigKey::new(
    "publishing.enabled",
    &["JAVA_CONVENTIONS_PUBLISHING_ENABLED"],
    KeyDefault::Flag(true),
);

pub const PUBLISHING_GITHUB_OWNER: ConfigKey = ConfigKey::new(
    "publishing.githubOwner",
    &[
        "JAVA_CONVENTIONS_PUBLISHING_GITHUB_OWNER",
        // Set by GitHub Actions
        "GITHUB_REPOSITORY_OWNER",
    ],
    KeyDefault::Computed("project.group"),
);

pub const PUBLISHING_DEVELOPER_ID: ConfigKey = ConfigKey::new(
    "publishing.developer.id",
    &["JAVA_CONVENTIONS_PUBLISHING_DEVELOPER_ID"],
    KeyDefault::Computed("publishing.githubOwner"),
);

pub const PUBLISHING_DEVELOPER_NAME: ConfigKey = ConfigKey::new(
    "publishing.developer.name",
    &["JAVA_CONVENTIONS_PUBLISHING_DEVELOPER_NAME"],
    KeyDefault::Computed("publishing.githubOwner"),
);

pub const PUBLISHING_DEVELOPER_URL: ConfigKey = ConfigKey::new(
    "publishing.developer.url",
    &["JAVA_CONVENTIONS_PUBLISHING_DEVELOPER_URL"],
    KeyDefault::Computed("publishing.githubOwner"),
);

pub const BASE_PACKAGE: ConfigKey = ConfigKey::new(
    "basePackage",
    &["JAVA_CONVENTIONS_BASE_PACKAGE"],
    KeyDefault::Computed("src/main/java package declarations"),
);

pub const GITHUB_PACKAGES_USER: ConfigKey =
    ConfigKey::new("gpr.user", &["GITHUB_ACTOR"], KeyDefault::Absent);

pub const GITHUB_PACKAGES_KEY: ConfigKey =
    ConfigKey::new("gpr.key", &["GITHUB_TOKEN"], KeyDefault::Absent);

// Project metadata; settings only
pub const PROJECT_NAME: ConfigKey =
    ConfigKey::new("project.name", &[], KeyDefault::Computed("project directory name"));

pub const PROJECT_GROUP: ConfigKey = ConfigKey::new("project.group", &[], KeyDefault::Absent);

pub const PROJECT_DESCRIPTION: ConfigKey =
    ConfigKey::new("project.description", &[], KeyDefault::Computed("project.name"));

/// Every key, in the order they are documented.
pub const ALL_KEYS: &[ConfigKey] = &[
    MAVEN_CENTRAL_ENABLED,
    PUBLISHING_ENABLED,
    PUBLISHING_GITHUB_OWNER,
    PUBLISHING_DEVELOPER_ID,
    PUBLISHING_DEVELOPER_NAME,
    PUBLISHING_DEVELOPER_URL,
    BASE_PACKAGE,
    GITHUB_PACKAGES_USER,
    GITHUB_PACKAGES_KEY,
    PROJECT_NAME,
    PROJECT_GROUP,
    PROJECT_DESCRIPTION,
];

/// Look up a key by canonical name.
pub fn find_key(name: &str) -> Option<&'static ConfigKey> {
    ALL_KEYS.iter().find(|key| key.name == name)
}
