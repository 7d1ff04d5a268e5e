//! `install-hooks` and `setup` commands

use colored::Colorize;

use conv_core::{HookInstallOutcome, ResourceMaterializer, install_pre_commit_hook};

use crate::context::ProjectContext;
use crate::error::Result;

/// Install the pre-commit hook. Projects without git are skipped.
pub fn run_install_hooks(context: &ProjectContext) -> Result<HookInstallOutcome> {
    let outcome = install_pre_commit_hook(context.project_dir(), &ResourceMaterializer::default())?;

    match &outcome {
        HookInstallOutcome::Installed(report) => println!(
            "{} Installed pre-commit hook at {} ({})",
            "OK".green().bold(),
            report.output.display(),
            report.origin.to_string().dimmed()
        ),
        HookInstallOutcome::SkippedNoGit => println!(
            "{} No git repository found; skipped hook installation.",
            "note:".yellow().bold()
        ),
    }
    Ok(outcome)
}

/// Install hooks and report that the project is ready.
pub fn run_setup(context: &ProjectContext) -> Result<()> {
    let outcome = run_install_hooks(context)?;

    let summary = match outcome {
        HookInstallOutcome::Installed(report) => match report.output.parent() {
            Some(dir) => format!("Git hooks installed in {}", dir.display()),
            None => "Git hooks installed".to_string(),
        },
        HookInstallOutcome::SkippedNoGit => "Git hooks not installed".to_string(),
    };
    println!("{} Setup complete. {}", "=>".blue().bold(), summary);
    Ok(())
}
