//! Project-level settings
//!
//! Settings come from `conventions.toml` at the project root plus any
//! `-P key=value` overrides given on the command line. Nested tables are
//! flattened into dot-separated keys, so these two files are equivalent:
//!
//! ```toml
//! [publishing]
//! enabled = false
//! ```
//!
//! ```toml
//! "publishing.enabled" = false
//! ```
//!
//! Scalar values are kept in their textual form; typed parsing happens in
//! the resolver so every layer is validated the same way.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use conv_fs::{ConventionPath, io};
use toml::{Table, Value};

use crate::{Error, Result};

/// Flattened key/value settings for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSettings {
    values: BTreeMap<String, String>,
}

impl ProjectSettings {
    /// Settings with no values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load `conventions.toml` from `project_dir`.
    ///
    /// A missing file yields empty settings.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = ConventionPath::SettingsFile.under(project_dir);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No settings file; using empty settings");
            return Ok(Self::empty());
        }

        tracing::debug!(path = %path.display(), "Loading project settings");
        let content = io::read_text(&path)?;
        Self::parse(&content, &path)
    }

    /// Parse settings from TOML text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let table: Table = toml::from_str(content)?;
        let mut values = BTreeMap::new();
        flatten_into(&mut values, None, &table, path)?;
        Ok(Self { values })
    }

    /// Build settings from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a value, replacing any existing one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Apply `key=value` overrides on top of these settings.
    ///
    /// Only the first `=` separates key from value; the key is trimmed, the
    /// value is kept verbatim for the resolver to validate.
    pub fn with_overrides<S: AsRef<str>>(mut self, overrides: &[S]) -> Result<Self> {
        for raw in overrides {
            let raw = raw.as_ref();
            let (key, value) = parse_override(raw)?;
            tracing::debug!(key, "Applying property override");
            self.set(key, value);
        }
        Ok(self)
    }

    /// Raw value for a canonical key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `key=value`.
pub fn parse_override(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(Error::InvalidOverride {
            raw: raw.to_string(),
        }),
    }
}

fn flatten_into(
    values: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    table: &Table,
    path: &Path,
) -> Result<()> {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            Value::Table(nested) => flatten_into(values, Some(&key), nested, path)?,
            Value::String(text) => {
                values.insert(key, text.clone());
            }
            Value::Boolean(flag) => {
                values.insert(key, flag.to_string());
            }
            Value::Integer(number) => {
                values.insert(key, number.to_string());
            }
            Value::Float(number) => {
                values.insert(key, number.to_string());
            }
            Value::Datetime(datetime) => {
                values.insert(key, datetime.to_string());
            }
            Value::Array(_) => {
                return Err(Error::InvalidSetting {
                    path: PathBuf::from(path),
                    key,
                    reason: "arrays are not supported; use a comma-separated string".into(),
                });
            }
        }
    }
    Ok(())
}
