//! Command handlers, one module per subcommand.

pub mod completion;
pub mod config_cmd;
pub mod demo;
pub mod run;
pub mod version;
