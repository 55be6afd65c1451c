//! Startup logic for AgentForge: tracing, provider resolution, and the
//! `run`, `ask` and `providers` commands.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agentforge_api::{ApiServer, ApiServerConfig, AppState};
use agentforge_config::{Config, ConfigLoader, LoggingConfig};
use agentforge_core::{resolve_provider, ProviderRegistry, ResolvedProvider, Runner};
use agentforge_protocols::provider::GenerateOptions;

use crate::register::register_providers;

/// Initialize tracing with console and optional file output.
///
/// `RUST_LOG` takes precedence over `logging.level`. Console output goes to
/// stderr so `ask` can print its result on stdout.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &logging.dir {
        Some(dir) => {
            let log_dir = ConfigLoader::expand_path(dir);
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("agentforge")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the worker alive for the program duration.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// Register the built-in providers and resolve the configured one.
pub(crate) fn resolve_active(config: &Config) -> Result<ResolvedProvider, Box<dyn std::error::Error>> {
    let registry = ProviderRegistry::new();
    register_providers(&registry, config);

    let resolved = resolve_provider(&registry, &config.provider).map_err(|e| {
        error!("Provider resolution failed: {}", e);
        e
    })?;
    if resolved.fell_back() {
        warn!(
            "Configured provider '{}' unavailable, serving with '{}'",
            resolved.requested, resolved.resolved
        );
    }
    Ok(resolved)
}

/// Run the HTTP server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting AgentForge v{}", env!("CARGO_PKG_VERSION"));

    let resolved = resolve_active(&config)?;
    let state = Arc::new(AppState::new(
        config.provider.clone(),
        Runner::new(resolved.provider),
    ));

    let server = ApiServer::new(
        ApiServerConfig::new(config.server.host.clone(), config.server.port),
        state,
    );
    server.run().await?;

    info!("AgentForge stopped");
    Ok(())
}

/// Send one prompt through the active provider and print the result.
pub(crate) async fn run_ask(
    config: Config,
    prompt: &str,
    max_tokens: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if prompt.is_empty() {
        return Err("prompt required".into());
    }

    let resolved = resolve_active(&config)?;
    let runner = Runner::new(resolved.provider);
    let result = runner
        .ask(prompt, GenerateOptions::default().with_max_tokens(max_tokens))
        .await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Print the registered provider names.
pub(crate) fn list_providers(config: &Config) {
    let registry = ProviderRegistry::new();
    register_providers(&registry, config);

    for name in registry.list_ids() {
        let marker = if name == config.provider { " (configured)" } else { "" };
        println!("{}{}", name, marker);
    }
}
