//! `resolve` command

use colored::Colorize;

use conv_core::ResolvedConventions;

use crate::context::ProjectContext;
use crate::error::Result;

/// Resolve and print the full configuration.
pub fn run_resolve(context: &ProjectContext, json: bool) -> Result<()> {
    let resolved = context.resolver()?.resolve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    print_human(&resolved);
    Ok(())
}

fn print_human(resolved: &ResolvedConventions) {
    println!(
        "{} Conventions for {} ({})",
        "=>".blue().bold(),
        resolved.project.name.cyan(),
        resolved.project_dir.display().to_string().dimmed()
    );
    println!();

    row("group", resolved.project.group.as_deref().unwrap_or("-"));
    row("description", &resolved.project.description);
    row("maven central", enabled(resolved.maven_central_enabled));
    row("publishing", enabled(resolved.publishing_enabled));
    row(
        "github owner",
        resolved.github_owner.as_deref().unwrap_or("(unresolved)"),
    );
    row("base packages", &resolved.annotated_packages);
    row(
        "checkstyle config",
        &resolved.checkstyle.config_file.display().to_string(),
    );
    row(
        "suppressions",
        &resolved.checkstyle.suppressions_file.display().to_string(),
    );

    let Some(publication) = &resolved.publication else {
        return;
    };
    println!();
    println!("{}", "Publication".bold());
    row("pom name", &publication.pom_name);
    row("pom description", &publication.pom_description);
    row("license", &publication.license.name);
    if let Some(url) = &publication.url {
        row("url", url);
    }
    if let Some(scm) = &publication.scm {
        row("scm connection", &scm.connection);
        row("developer connection", &scm.developer_connection);
    }
    if let Some(developer) = &publication.developer {
        row(
            "developer",
            &format!("{} ({}) {}", developer.name, developer.id, developer.url),
        );
    }
    if let Some(packages) = &publication.github_packages {
        row(packages.name, &packages.url);
        row(
            "  user",
            packages.credentials.username.as_deref().unwrap_or("(absent)"),
        );
        row(
            "  key",
            if packages.credentials.password.is_some() {
                "(configured)"
            } else {
                "(absent)"
            },
        );
    }
}

fn row(label: &str, value: &str) {
    println!("  {:<22} {}", label.dimmed(), value);
}

fn enabled(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
