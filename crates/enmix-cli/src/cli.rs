use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enmix", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Optional TOML config with the generation range
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the energy-mix table, most recent year first
    Table {
        /// First year of the generated range
        #[arg(long)]
        from: Option<i32>,
        /// Last year of the generated range
        #[arg(long)]
        to: Option<i32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = TableFormat::Plain)]
        format: TableFormat,
    },
    /// Estimate the renewable share of a consumption figure
    Allocate {
        /// Total consumption in TWh
        consumption: f64,
        /// First year of the generated range
        #[arg(long)]
        from: Option<i32>,
        /// Last year of the generated range (the allocation reference)
        #[arg(long)]
        to: Option<i32>,
    },
    /// Validate the generated series invariants
    Validate {
        /// First year of the generated range
        #[arg(long)]
        from: Option<i32>,
        /// Last year of the generated range
        #[arg(long)]
        to: Option<i32>,
        /// Emit diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Account and session management
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TableFormat {
    Plain,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Register a new account (and log it in)
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation; must match
        #[arg(long)]
        confirm: String,
        /// Session store path (defaults to the user data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Log in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Session store path (defaults to the user data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Log out the active account
    Logout {
        /// Session store path (defaults to the user data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Show the active account
    Whoami {
        /// Session store path (defaults to the user data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },
}
