//! `pb config` -- write or inspect the board configuration.

use anyhow::{Context, Result, bail};
use board_config::config::{BoardConfig, save_config};
use board_ui::styles::{render_muted, render_pass_icon};

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `pb config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    let path = &ctx.config_path;

    match &args.command {
        ConfigCommands::Init(init_args) => {
            if path.exists() && !init_args.force {
                bail!(
                    "{} already exists\nHint: pass --force to overwrite it",
                    path.display()
                );
            }

            save_config(path, &BoardConfig::default())
                .with_context(|| format!("failed to write config to {}", path.display()))?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "path": path,
                    "created": true,
                }));
            } else if !ctx.quiet {
                println!("{} Wrote {}", render_pass_icon(), path.display());
            }
        }

        ConfigCommands::Show => {
            let config = ctx.load_config()?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "path": path,
                    "exists": path.exists(),
                    "config": config,
                }));
            } else {
                let source = if path.exists() {
                    format!("# {}", path.display())
                } else {
                    format!("# {} (not found, using defaults)", path.display())
                };
                println!("{}", render_muted(&source));
                let yaml = serde_yaml::to_string(&config).context("failed to render config")?;
                print!("{}", yaml);
            }
        }
    }

    Ok(())
}
