mod config;
mod logging;
mod secret;
mod server;
mod signals;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{AppConfig, CliOverrides};

/// Calc Server - arithmetic over literals and persisted named constants
#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calc Server - arithmetic over literals and persisted named constants")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        mock: cli.mock,
    });
    config.validate()?;

    logging::init_logging(&config.logging, cli.verbose)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            tracing::info!("Calc server starting");
            server::run(config).await
        }
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
