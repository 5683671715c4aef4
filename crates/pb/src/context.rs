//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what every command handler needs: the
//! resolved config file path and the global flags.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use board_config::config::{BoardConfig, load_config};
use board_config::discover::resolve_config_path;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The config file in effect. It need not exist.
    pub config_path: PathBuf,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The config path is resolved from `--config`, then `PBOARD_CONFIG`,
    /// then the nearest `board.yaml` above the current directory.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to read the current directory")?;
        Ok(Self::with_start_dir(global, &cwd))
    }

    fn with_start_dir(global: &GlobalArgs, start: &Path) -> Self {
        Self {
            config_path: resolve_config_path(global.config.as_deref(), start),
            json: global.json,
            quiet: global.quiet,
        }
    }

    /// Loads the config file, falling back to defaults when it is missing.
    pub fn load_config(&self) -> Result<BoardConfig> {
        load_config(&self.config_path)
            .with_context(|| format!("failed to load config from {}", self.config_path.display()))
    }
}
