//! AgentForge - minimal HTTP facade over interchangeable LLM backends.
//!
//! Main entry point for the AgentForge CLI and server.

mod cli;
mod register;
mod server;

use clap::Parser;
use tracing::error;

use agentforge_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, list_providers, run_ask, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ignore_missing_env_file(dotenvy::dotenv())?;

    let cli = Cli::parse();

    let (config_path, required) = cli.config_path();
    let mut config = ConfigLoader::load_or_default(&config_path, required)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;

    let result = match cli.command {
        None | Some(Commands::Run { .. }) => run_server(config).await,
        Some(Commands::Ask { prompt, max_tokens }) => run_ask(config, &prompt, max_tokens).await,
        Some(Commands::Providers) => {
            list_providers(&config);
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

/// A missing .env file is fine; a malformed one is not.
fn ignore_missing_env_file<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
