//! Command implementations for conv-cli

pub mod checkstyle;
pub mod detect;
pub mod explain;
pub mod hooks;
pub mod keys;
pub mod resolve;

pub use checkstyle::run_write_checkstyle_config;
pub use detect::run_detect_packages;
pub use explain::run_explain;
pub use hooks::{run_install_hooks, run_setup};
pub use keys::run_keys;
pub use resolve::run_resolve;
