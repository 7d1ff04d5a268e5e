//! `explain` command

use colored::Colorize;

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Print each key, its resolved value and the layer that supplied it.
pub fn run_explain(context: &ProjectContext) -> Result<()> {
    let lines = context.resolver()?.explain();

    println!(
        "  {:<36} {:<40} {}",
        "KEY".bold(),
        "VALUE".bold(),
        "SOURCE".bold()
    );
    println!("  {}", "\u{2500}".repeat(90).dimmed());

    let mut failed = 0;
    for line in lines {
        if let Some(error) = line.error {
            failed += 1;
            println!("  {:<36} {}", line.key.cyan(), error.red());
            continue;
        }
        let value = line.value.unwrap_or_else(|| "-".to_string());
        let source = line
            .source
            .map(|layer| layer.to_string())
            .unwrap_or_else(|| "unset".to_string());
        println!(
            "  {:<36} {:<40} {}",
            line.key.cyan(),
            value,
            source.dimmed()
        );
    }

    if failed > 0 {
        return Err(CliError::user(format!("{failed} key(s) could not be resolved")));
    }
    Ok(())
}
