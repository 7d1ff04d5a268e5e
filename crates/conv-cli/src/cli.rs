//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve shared Java project conventions for a project directory
#[derive(Parser, Debug)]
#[command(name = "conventions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root directory
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Project setting override as key=value (repeatable)
    ///
    /// Overrides take precedence over conventions.toml but not over
    /// environment variables.
    #[arg(short = 'P', long = "property", global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve and print the full configuration
    Resolve {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show each key's resolved value and the layer that supplied it
    Explain,

    /// Print the root Java packages found under src/main/java
    DetectPackages,

    /// Write checkstyle.xml and suppressions.xml to build/generated/checkstyle
    ///
    /// Files under config/checkstyle/ replace the bundled defaults.
    WriteCheckstyleConfig,

    /// Install the pre-commit hook into the git hooks directory
    ///
    /// scripts/git-hooks/pre-commit replaces the bundled hook. Projects
    /// without a .git directory or file are skipped.
    InstallHooks,

    /// Set up the project (installs git hooks)
    Setup,

    /// List the configuration keys with their environment variables and defaults
    Keys {
        /// Show only this key
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["conventions"]);
        assert!(!cli.verbose);
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert!(cli.properties.is_empty());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_resolve_json() {
        let cli = Cli::parse_from(["conventions", "resolve", "--json"]);
        assert_eq!(cli.command, Some(Commands::Resolve { json: true }));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "conventions",
            "explain",
            "-C",
            "/tmp/project",
            "-P",
            "basePackage=com.acme",
            "--property",
            "publishing.enabled=false",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.project_dir, PathBuf::from("/tmp/project"));
        assert_eq!(
            cli.properties,
            vec!["basePackage=com.acme", "publishing.enabled=false"]
        );
        assert_eq!(cli.command, Some(Commands::Explain));
    }

    #[test]
    fn parse_kebab_case_commands() {
        for (arg, expected) in [
            ("detect-packages", Commands::DetectPackages),
            ("write-checkstyle-config", Commands::WriteCheckstyleConfig),
            ("install-hooks", Commands::InstallHooks),
            ("setup", Commands::Setup),
            ("keys", Commands::Keys { name: None }),
        ] {
            let cli = Cli::parse_from(["conventions", arg]);
            assert_eq!(cli.command, Some(expected));
        }
    }

    #[test]
    fn parse_keys_with_name() {
        let cli = Cli::parse_from(["conventions", "keys", "basePackage"]);
        assert_eq!(
            cli.command,
            Some(Commands::Keys {
                name: Some("basePackage".into())
            })
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["conventions", "publish"]).is_err());
    }
}
