//! Layered property resolution
//!
//! Values are looked up in three layers, highest precedence first:
//!
//! 1. **Environment**: the key's aliases, in declared order
//! 2. **Project settings**: `conventions.toml` plus `-P key=value` overrides
//! 3. **Default**: the key's policy, or inference by the aggregator
//!
//! # Example
//!
//! ```
//! use conv_core::config::{
//!     Environment, ProjectSettings, PropertyResolver, PropertyStore, keys,
//! };
//!
//! let store = PropertyStore::new(
//!     Environment::from_pairs([("JAVA_CONVENTIONS_PUBLISHING_ENABLED", "FALSE")]),
//!     ProjectSettings::from_pairs([("publishing.enabled", "true")]),
//! );
//! let resolver = PropertyResolver::new(store);
//!
//! let enabled = resolver.resolve_boolean(&keys::PUBLISHING_ENABLED, true).unwrap();
//! assert!(!enabled.value);
//! ```

mod environment;
mod field_group;
pub mod keys;
mod parser;
mod resolver;
mod settings;
mod store;

pub use environment::Environment;
pub use field_group::FieldGroup;
pub use keys::{ConfigKey, KeyDefault};
pub use parser::{parse_boolean, parse_string};
pub use resolver::{PropertyResolver, ResolvedValue};
pub use settings::{ProjectSettings, parse_override};
pub use store::{Layer, PropertyStore, RawValue};
