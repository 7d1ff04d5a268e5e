//! Raw configuration layers
//!
//! The store answers "which layer has a value for this key" without
//! interpreting the value. Layers, highest precedence first:
//!
//! 1. **Environment**: the first present alias of the key
//! 2. **Project setting**: the canonical key in [`ProjectSettings`]
//! 3. **Default**: handled by the resolver from the key's policy

use std::fmt;

use serde::Serialize;

use super::environment::Environment;
use super::keys::ConfigKey;
use super::settings::ProjectSettings;

/// The layer that supplied a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layer", rename_all = "kebab-case")]
pub enum Layer {
    /// An environment variable, named by the alias that matched
    Environment { variable: String },
    /// The project settings (file or `-P` override)
    ProjectSetting,
    /// The key's fixed default
    Default,
    /// Computed by the aggregator (e.g. owner or package inference)
    Inferred,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment { variable } => write!(f, "environment ({variable})"),
            Self::ProjectSetting => write!(f, "project setting"),
            Self::Default => write!(f, "default"),
            Self::Inferred => write!(f, "inferred"),
        }
    }
}

/// An uninterpreted value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub value: String,
    pub layer: Layer,
}

/// The environment and project-settings layers for one project.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    env: Environment,
    settings: ProjectSettings,
}

impl PropertyStore {
    pub fn new(env: Environment, settings: ProjectSettings) -> Self {
        Self { env, settings }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// Highest-precedence raw value for `key`, if any layer has one.
    pub fn lookup(&self, key: &ConfigKey) -> Option<RawValue> {
        if let Some((variable, value)) = self.env.first_of(key.env_aliases) {
            tracing::debug!(key = key.name, variable, "Value supplied by environment");
            return Some(RawValue {
                value: value.to_string(),
                layer: Layer::Environment {
                    variable: variable.to_string(),
                },
            });
        }

        if let Some(value) = self.settings.get(key.name) {
            tracing::debug!(key = key.name, "Value supplied by project setting");
            return Some(RawValue {
                value: value.to_string(),
                layer: Layer::ProjectSetting,
            });
        }

        tracing::debug!(key = key.name, "No configured value");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys::{KeyDefault, PUBLISHING_GITHUB_OWNER};

    const KEY: ConfigKey =
        ConfigKey::new("feature.enabled", &["FEATURE_ENABLED"], KeyDefault::Flag(true));

    #[test]
    fn environment_beats_project_setting() {
        let store = PropertyStore::new(
            Environment::from_pairs([("FEATURE_ENABLED", "false")]),
            ProjectSettings::from_pairs([("feature.enabled", "true")]),
        );

        let raw = store.lookup(&KEY).unwrap();
        assert_eq!(raw.value, "false");
        assert_eq!(
            raw.layer,
            Layer::Environment {
                variable: "FEATURE_ENABLED".into()
            }
        );
    }

    #[test]
    fn project_setting_used_without_environment() {
        let store = PropertyStore::new(
            Environment::empty(),
            ProjectSettings::from_pairs([("feature.enabled", "true")]),
        );

        let raw = store.lookup(&KEY).unwrap();
        assert_eq!(raw.layer, Layer::ProjectSetting);
    }

    #[test]
    fn settings_are_not_looked_up_by_alias() {
        let store = PropertyStore::new(
            Environment::empty(),
            ProjectSettings::from_pairs([("FEATURE_ENABLED", "true")]),
        );
        assert!(store.lookup(&KEY).is_none());
    }

    #[test]
    fn first_alias_wins() {
        let store = PropertyStore::new(
            Environment::from_pairs([
                ("GITHUB_REPOSITORY_OWNER", "from-actions"),
                ("JAVA_CONVENTIONS_PUBLISHING_GITHUB_OWNER", "explicit"),
            ]),
            ProjectSettings::empty(),
        );

        assert_eq!(
            store.lookup(&PUBLISHING_GITHUB_OWNER).unwrap().value,
            "explicit"
        );
    }

    #[test]
    fn layer_display() {
        assert_eq!(
            Layer::Environment {
                variable: "X".into()
            }
            .to_string(),
            "environment (X)"
        );
        assert_eq!(Layer::ProjectSetting.to_string(), "project setting");
    }
}
