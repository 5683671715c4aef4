//! `pb run` -- execute a session script against a fresh board.

use std::fs;
use std::io;

use anyhow::{Context, Result};
use board_ui::styles::{
    render_accent, render_fail_icon, render_muted, render_pass_icon, render_project_compact,
    render_status, render_warn_icon,
};
use board_ui::terminal;

use crate::cli::RunArgs;
use crate::context::RuntimeContext;
use crate::output::{BoardView, output_json};
use crate::script::parse_script;
use crate::session::{Outcome, Session};

/// Execute the `pb run` command.
pub fn run(ctx: &RuntimeContext, args: &RunArgs) -> Result<()> {
    let text = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read script from stdin")?,
    };
    execute(ctx, &text)
}

/// Parses `text`, runs every step on a new board, then prints the board.
///
/// The whole script is parsed before the board is built, so a syntax error
/// runs nothing.
pub fn execute(ctx: &RuntimeContext, text: &str) -> Result<()> {
    let config = ctx.load_config()?;
    if !config.display.color {
        terminal::disable_color();
    }

    let steps = parse_script(text)?;
    let mut session = Session::new(&config).context("failed to build the board")?;
    tracing::debug!(steps = steps.len(), "session started");

    for line in &steps {
        let outcome = session.execute(line)?;
        report(ctx, &outcome);
    }

    if ctx.json {
        output_json(&BoardView::from_projects(&session.board().snapshot()));
    } else {
        print!("{}", session.board().render());
    }
    Ok(())
}

/// Prints what a step did. Alerts always go to stderr; confirmations are
/// dropped under `--quiet` and `--json`.
fn report(ctx: &RuntimeContext, outcome: &Outcome) {
    match outcome {
        Outcome::Rejected { message } => {
            eprintln!("{} {}", render_fail_icon(), message);
        }
        _ if ctx.json => {}
        Outcome::Show(board) => println!("{}", board),
        Outcome::List(projects) => {
            if projects.is_empty() {
                println!("{}", render_muted("No projects"));
            }
            for project in projects {
                println!("{}", render_project_compact(project));
            }
        }
        _ if ctx.quiet => {}
        Outcome::Added { id, title } => {
            println!("{} Added {}: {}", render_pass_icon(), render_accent(id), title);
        }
        Outcome::Moved { id, status } => {
            println!(
                "{} Moved {} to {}",
                render_pass_icon(),
                render_accent(id),
                render_status(*status)
            );
        }
        Outcome::Unchanged { id, status } => {
            println!("{} {} is already {}", render_muted("-"), id, status);
        }
        Outcome::Ignored { id } => {
            println!("{} No project {}; nothing moved", render_warn_icon(), id);
        }
    }
}
