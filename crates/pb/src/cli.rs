//! Clap CLI definitions for the `pb` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// pb -- single-page project board.
///
/// Add projects through a validated form and drag them between the Active
/// and Finished columns. Nothing is persisted: every invocation is one
/// session.
#[derive(Parser, Debug)]
#[command(
    name = "pb",
    about = "Single-page project board",
    long_about = "Add projects through a validated form and drag them between the Active and Finished columns. Nothing is persisted: every invocation is one session.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file (default: $PBOARD_CONFIG, or the nearest board.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a session script against a fresh board.
    Run(RunArgs),

    /// Run a built-in session that adds, drags and moves projects.
    Demo,

    /// Manage the board configuration file.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Arguments for `pb run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to execute (default: read from stdin).
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Arguments for `pb config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values.
    Init(ConfigInitArgs),
    /// Print the effective configuration.
    Show,
}

/// Arguments for `pb config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `pb completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["pb", "run", "--json", "-v", "--script", "s.txt"]);
        assert!(cli.global.json);
        assert!(cli.global.verbose);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.script, Some(PathBuf::from("s.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
