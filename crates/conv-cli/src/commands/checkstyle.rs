//! `write-checkstyle-config` command

use colored::Colorize;

use conv_core::{ResourceMaterializer, write_checkstyle_config};

use crate::context::ProjectContext;
use crate::error::Result;

/// Materialize the Checkstyle configuration and suppressions.
pub fn run_write_checkstyle_config(context: &ProjectContext) -> Result<()> {
    let reports = write_checkstyle_config(context.project_dir(), &ResourceMaterializer::default())?;

    for report in reports {
        println!(
            "{} Wrote {} from {}",
            "OK".green().bold(),
            report.output.display(),
            report.origin.to_string().dimmed()
        );
    }
    Ok(())
}
