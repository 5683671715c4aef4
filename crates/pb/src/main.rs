//! `pb` -- single-page project board CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;
mod script;
mod session;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pb=debug,board_core=debug,board_ui=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global)
        .and_then(|ctx| dispatch(&ctx, cli.command));

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Run(args)) => commands::run::run(ctx, &args),
        Some(Commands::Demo) => commands::demo::run(ctx),
        Some(Commands::Config(args)) => commands::config_cmd::run(ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(ctx, &args),
        Some(Commands::Version) => commands::version::run(ctx),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
