//! Java conventions CLI
//!
//! Resolves the shared conventions of a Java project and materializes the
//! files they provide.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::ProjectContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} Java conventions resolver", "conventions".green().bold());
        println!();
        println!("Run {} for available commands.", "conventions --help".cyan());
        return Ok(());
    };

    if let Commands::Keys { name } = &command {
        return commands::run_keys(name.as_deref());
    }

    let context = ProjectContext::new(&cli.project_dir, cli.properties)?;
    execute_command(command, &context)
}

fn execute_command(command: Commands, context: &ProjectContext) -> Result<()> {
    match command {
        Commands::Resolve { json } => commands::run_resolve(context, json),
        Commands::Explain => commands::run_explain(context),
        Commands::DetectPackages => commands::run_detect_packages(context),
        Commands::WriteCheckstyleConfig => commands::run_write_checkstyle_config(context),
        Commands::InstallHooks => commands::run_install_hooks(context).map(|_| ()),
        Commands::Setup => commands::run_setup(context),
        Commands::Keys { name } => commands::run_keys(name.as_deref()),
    }
}
