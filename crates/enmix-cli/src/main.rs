use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use enmix_cli::cli::{Cli, Commands};
use enmix_cli::config::{load_config, resolve_range, CliConfig};

mod commands;
use crate::commands::{account, allocate, table, validate};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };

    match &cli.command {
        Some(Commands::Table { from, to, format }) => {
            let range = resolve_range(&config, *from, *to)?;
            info!("Rendering mix table for {}-{}", range.start, range.end);
            table::handle(range, *format)
        }
        Some(Commands::Allocate {
            consumption,
            from,
            to,
        }) => {
            let range = resolve_range(&config, *from, *to)?;
            info!(
                "Allocating {} TWh against the {} reference",
                consumption, range.end
            );
            allocate::handle(*consumption, range)
        }
        Some(Commands::Validate { from, to, json }) => {
            let range = resolve_range(&config, *from, *to)?;
            info!("Validating series for {}-{}", range.start, range.end);
            validate::handle(range, *json)
        }
        Some(Commands::Account { command }) => account::handle(command),
        None => {
            info!("No subcommand provided. Use `enmix --help` for more information.");
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(&cli) {
        Ok(()) => info!("Command successful!"),
        Err(e) => {
            error!("Command failed: {e:?}");
            std::process::exit(1);
        }
    }
}
