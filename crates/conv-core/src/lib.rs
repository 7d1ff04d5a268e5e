//! Configuration resolution engine for shared Java project conventions
//!
//! Many projects share one convention definition. Each project may override,
//! disable or let values be inferred; this crate decides the effective
//! values deterministically and fails fast on bad configuration.
//!
//! # Modules
//!
//! - [`config`] - layered settings: environment, `conventions.toml`, defaults
//! - [`owner`] - GitHub owner inference from `io.github.<owner>` groups
//! - [`detect`] - root Java package detection under `src/main/java`
//! - [`materialize`] - override-or-bundled file production
//! - [`hooks`] - pre-commit hook installation
//! - [`conventions`] - the aggregated [`ResolvedConventions`]

pub mod config;
pub mod conventions;
pub mod detect;
pub mod error;
pub mod hooks;
pub mod materialize;
pub mod owner;
pub mod resources;

pub use conventions::{ConventionsResolver, Explanation, ResolvedConventions};
pub use detect::{NamespaceDeclaration, detect, detect_base_packages};
pub use error::{Error, Result};
pub use hooks::{HookInstallOutcome, install_pre_commit_hook};
pub use materialize::{
    MaterializeReport, Origin, ResourceId, ResourceMaterializer, ResourceRequest,
    write_checkstyle_config,
};
pub use owner::infer_owner;
pub use resources::BundledResources;
