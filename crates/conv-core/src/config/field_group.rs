//! All-or-nothing groups of settings
//!
//! Some settings only make sense together (a developer's id, name and URL).
//! A [`FieldGroup`] resolves every member and rejects partial configuration.

use super::keys::ConfigKey;
use super::resolver::PropertyResolver;
use crate::{Error, Result};

/// Keys that must be configured together or not at all.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup<const N: usize> {
    keys: [ConfigKey; N],
}

impl<const N: usize> FieldGroup<N> {
    pub const fn new(keys: [ConfigKey; N]) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[ConfigKey; N] {
        &self.keys
    }

    /// Resolve every member.
    ///
    /// Returns `None` when no member is configured and every value, in key
    /// order, when all are. Blank members fail as they would on their own;
    /// a mix of configured and absent members fails with
    /// [`Error::IncompleteGroup`].
    pub fn resolve(&self, resolver: &PropertyResolver) -> Result<Option<[String; N]>> {
        let mut values: [Option<String>; N] = std::array::from_fn(|_| None);
        for (slot, key) in values.iter_mut().zip(&self.keys) {
            *slot = resolver.resolve_string(key)?.map(|resolved| resolved.value);
        }

        let configured = values.iter().filter(|v| v.is_some()).count();
        if configured == 0 {
            return Ok(None);
        }
        if configured < N {
            let missing: Vec<&str> = self
                .keys
                .iter()
                .zip(&values)
                .filter(|(_, v)| v.is_none())
                .map(|(k, _)| k.name)
                .collect();
            tracing::debug!(?missing, "Field group partially configured");
            return Err(Error::IncompleteGroup {
                keys: self.keys.iter().map(|k| k.name.to_string()).collect(),
            });
        }

        Ok(Some(values.map(Option::unwrap_or_default)))
    }
}
