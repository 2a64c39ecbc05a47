pub mod cli;
pub mod config;

pub use cli::{AccountCommands, Cli, Commands, TableFormat};
pub use config::{load_config, resolve_range, CliConfig};
