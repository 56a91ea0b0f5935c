use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hivsim_core::config::RootConfig;
use hivsim_infrastructure::ConfigService;

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "hivsim")]
#[command(about = "hivsim - role-gated client for the HIV dynamics simulator", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the simulation engine, overriding the configuration
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bundled reference simulation engine
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:8000)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Register, run one casual simulation and print the result
    Run {
        /// Identity to register for the run
        #[arg(long, default_value = "cli@localhost")]
        identity: String,
        /// Print the chart data as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Start the interactive client
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let (mut config, load_error) = match service.load() {
        Ok(config) => (config, None),
        Err(e) => (RootConfig::default(), Some(e)),
    };
    if let Some(api_base) = cli.api_base {
        config.api.base_url = api_base;
    }

    logging::init(&config.log.level);
    if let Some(e) = load_error {
        tracing::warn!(
            "[Bootstrap] Ignoring configuration at {}: {}",
            service.path().display(),
            e
        );
    }
    tracing::debug!("[Bootstrap] Engine base URL: {}", config.api.base_url);

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.engine.bind.clone());
            commands::serve::run(&bind).await?
        }
        Commands::Run { identity, json } => commands::run::run(&config, &identity, json).await?,
        Commands::Repl => commands::repl::run(&config).await?,
    }

    Ok(())
}
