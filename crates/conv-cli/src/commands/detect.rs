//! `detect-packages` command

use colored::Colorize;

use conv_core::detect_base_packages;

use crate::context::ProjectContext;
use crate::error::Result;

/// Print the detected root packages, one per line.
pub fn run_detect_packages(context: &ProjectContext) -> Result<()> {
    let packages = detect_base_packages(context.project_dir());
    if packages.is_empty() {
        eprintln!(
            "{} No package declarations found under src/main/java",
            "note:".yellow().bold()
        );
        return Ok(());
    }

    for package in packages {
        println!("{package}");
    }
    Ok(())
}
