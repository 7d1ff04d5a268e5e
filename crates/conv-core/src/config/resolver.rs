//! Typed, memoized property resolution
//!
//! `PropertyResolver` applies layer precedence from [`PropertyStore`] and the
//! parsing rules from [`parser`](super::parser). Raw lookups are memoized per
//! key, so one resolver always answers the same way for the same key.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;

use super::keys::ConfigKey;
use super::parser::{parse_boolean, parse_string};
use super::store::{Layer, PropertyStore, RawValue};
use crate::Result;

/// A typed value and the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue<T> {
    pub value: T,
    #[serde(flatten)]
    pub layer: Layer,
}

impl<T> ResolvedValue<T> {
    pub fn new(value: T, layer: Layer) -> Self {
        Self { value, layer }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Resolves typed values for [`ConfigKey`]s over one [`PropertyStore`].
///
/// The resolver is scoped to a single resolution pass; build a new one to
/// observe changed inputs.
#[derive(Debug)]
pub struct PropertyResolver {
    store: PropertyStore,
    memo: RefCell<HashMap<&'static str, Option<RawValue>>>,
}

impl PropertyResolver {
    pub fn new(store: PropertyStore) -> Self {
        Self {
            store,
            memo: RefCell::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Highest-precedence raw value for `key`, memoized.
    pub fn raw(&self, key: &ConfigKey) -> Option<RawValue> {
        if let Some(cached) = self.memo.borrow().get(key.name) {
            return cached.clone();
        }
        let raw = self.store.lookup(key);
        self.memo.borrow_mut().insert(key.name, raw.clone());
        raw
    }

    /// Resolve a boolean; absent at every layer yields `default`.
    pub fn resolve_boolean(&self, key: &ConfigKey, default: bool) -> Result<ResolvedValue<bool>> {
        match self.raw(key) {
            Some(raw) => {
                let value = parse_boolean(key.name, Some(&raw.value), default)?;
                Ok(ResolvedValue::new(value, raw.layer))
            }
            None => Ok(ResolvedValue::new(default, Layer::Default)),
        }
    }

    /// Resolve a trimmed, non-blank string; absent at every layer is `None`.
    pub fn resolve_string(&self, key: &ConfigKey) -> Result<Option<ResolvedValue<String>>> {
        let Some(raw) = self.raw(key) else {
            return Ok(None);
        };
        let value = parse_string(key.name, Some(&raw.value))?;
        Ok(value.map(|value| ResolvedValue::new(value, raw.layer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::Environment;
    use crate::config::keys::{BASE_PACKAGE, KeyDefault, MAVEN_CENTRAL_ENABLED};
    use crate::config::settings::ProjectSettings;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn resolver(env: &[(&str, &str)], settings: &[(&str, &str)]) -> PropertyResolver {
        PropertyResolver::new(PropertyStore::new(
            Environment::from_pairs(env.iter().copied()),
            ProjectSettings::from_pairs(settings.iter().copied()),
        ))
    }

    #[test]
    fn boolean_precedence_across_all_layers() {
        let env_wins = resolver(
            &[("JAVA_CONVENTIONS_MAVEN_CENTRAL_ENABLED", "false")],
            &[("repositories.mavenCentral.enabled", "true")],
        );
        let resolved = env_wins.resolve_boolean(&MAVEN_CENTRAL_ENABLED, true).unwrap();
        assert!(!resolved.value);
        assert!(matches!(resolved.layer, Layer::Environment { .. }));

        let setting_wins = resolver(&[], &[("repositories.mavenCentral.enabled", "false")]);
        let resolved = setting_wins
            .resolve_boolean(&MAVEN_CENTRAL_ENABLED, true)
            .unwrap();
        assert_eq!(resolved, ResolvedValue::new(false, Layer::ProjectSetting));

        let default_wins = resolver(&[], &[]);
        let resolved = default_wins
            .resolve_boolean(&MAVEN_CENTRAL_ENABLED, true)
            .unwrap();
        assert_eq!(resolved, ResolvedValue::new(true, Layer::Default));
    }

    #[test]
    fn invalid_environment_boolean_is_not_masked_by_setting() {
        let resolver = resolver(
            &[("JAVA_CONVENTIONS_MAVEN_CENTRAL_ENABLED", "sometimes")],
            &[("repositories.mavenCentral.enabled", "true")],
        );

        let err = resolver
            .resolve_boolean(&MAVEN_CENTRAL_ENABLED, true)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Property 'repositories.mavenCentral.enabled' must be 'true' or 'false', got 'sometimes'"
        );
    }

    #[test]
    fn string_precedence_and_trimming() {
        let resolver = resolver(
            &[("JAVA_CONVENTIONS_BASE_PACKAGE", "  com.from.env ")],
            &[("basePackage", "com.from.settings")],
        );

        let resolved = resolver.resolve_string(&BASE_PACKAGE).unwrap().unwrap();
        assert_eq!(resolved.value, "com.from.env");
    }

    #[test]
    fn blank_string_is_an_error_not_absent() {
        let resolver = resolver(&[], &[("basePackage", "   ")]);

        assert!(matches!(
            resolver.resolve_string(&BASE_PACKAGE),
            Err(Error::BlankValue { .. })
        ));
    }

    #[test]
    fn missing_string_is_absent() {
        let resolver = resolver(&[], &[]);
        assert_eq!(resolver.resolve_string(&BASE_PACKAGE).unwrap(), None);
    }

    #[test]
    fn lookups_are_memoized_per_key() {
        const KEY: ConfigKey = ConfigKey::new("x.y", &["X_Y"], KeyDefault::Absent);
        let resolver = resolver(&[("X_Y", "one")], &[]);

        let first = resolver.raw(&KEY);
        let second = resolver.raw(&KEY);
        assert_eq!(first, second);
        assert_eq!(resolver.memo.borrow().len(), 1);
    }
}
