//! `keys` command

use colored::Colorize;

use conv_core::config::keys::{ALL_KEYS, find_key};

use crate::error::{CliError, Result};

/// List the known keys with their environment aliases and defaults.
///
/// With a `name`, only that key is listed.
pub fn run_keys(name: Option<&str>) -> Result<()> {
    let selected = match name {
        Some(name) => {
            let key = find_key(name).ok_or_else(|| CliError::user(format!("Unknown key '{name}'")))?;
            std::slice::from_ref(key)
        }
        None => ALL_KEYS,
    };

    println!(
        "  {:<36} {:<44} {}",
        "KEY".bold(),
        "ENVIRONMENT".bold(),
        "DEFAULT".bold()
    );
    println!("  {}", "\u{2500}".repeat(100).dimmed());

    for key in selected {
        let aliases = if key.env_aliases.is_empty() {
            "-".to_string()
        } else {
            key.env_aliases.join(", ")
        };
        println!(
            "  {:<36} {:<44} {}",
            key.name.cyan(),
            aliases,
            key.default.to_string().dimmed()
        );
    }
    Ok(())
}
