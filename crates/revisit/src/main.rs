//! Revisit CLI - pre-qualify third-party image services.
//!
//! Checks that a service answers `HEAD /` and returns a well-formed image
//! payload from `POST /service` before it is trusted in production.
//!
//! # Usage
//!
//! ```bash
//! # Validate one service
//! revisit check https://service.example.com
//!
//! # Validate several, machine-readable
//! revisit check https://a.example.com https://b.example.com --format json
//!
//! # View configuration
//! revisit config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Revisit - validate image services against the HEAD / and POST /service contract.
#[derive(Parser, Debug)]
#[command(name = "revisit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "REVISIT_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more services
    Check(cli::check::CheckArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(raw) => revisit_core::Config::resolve_path(raw),
        None => revisit_core::Config::default_path(),
    };

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(_) if config_path.exists() => revisit_core::Config::load_from(&config_path)?,
        Some(_) => revisit_core::Config::default(),
        None => match revisit_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `revisit config path`."
                );
                revisit_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Revisit v{}", revisit_core::VERSION);

    match cli.command {
        Commands::Check(args) => cli::check::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config, &config_path).await,
    }
}
