//! CLI definitions for AgentForge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use agentforge_config::Config;

/// Config file read when `--config` is not given. Skipped if missing.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "agentforge.toml";

/// AgentForge CLI.
#[derive(Parser, Debug)]
#[command(name = "agentforge")]
#[command(about = "Minimal HTTP facade over interchangeable LLM backends")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Provider to activate (mock, openai, openrouter)
    #[arg(long, env = "PROVIDER", global = true)]
    pub provider: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run the HTTP server in foreground (default)
    Run {
        /// Server host
        #[arg(long, env = "AGENTFORGE_HOST")]
        host: Option<String>,

        /// Server port
        #[arg(long, env = "AGENTFORGE_PORT")]
        port: Option<u16>,
    },

    /// Send one prompt to the active provider and print the result
    Ask {
        /// Prompt text
        prompt: String,

        /// Completion token budget
        #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
        max_tokens: u32,
    },

    /// List registered provider names
    Providers,
}

impl Cli {
    /// Config path to load and whether it must exist.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        }
    }

    /// Apply command-line and environment overrides on top of the file config.
    pub fn apply_overrides(&self, config: &mut Config) {
        // A blank PROVIDER counts as unset.
        if let Some(provider) = self.provider.as_deref().filter(|p| !p.trim().is_empty()) {
            config.set_provider(provider);
        }
        if let Some(Commands::Run { host, port }) = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["agentforge"]).unwrap();
        assert!(cli.command.is_none());
        let (path, required) = cli.config_path();
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!required);
    }

    #[test]
    fn test_explicit_config_is_required() {
        let cli = Cli::try_parse_from(["agentforge", "--config", "custom.toml"]).unwrap();
        let (path, required) = cli.config_path();
        assert_eq!(path, PathBuf::from("custom.toml"));
        assert!(required);
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from([
            "agentforge", "run", "--host", "0.0.0.0", "--port", "9000", "--provider", "OpenAI",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.provider, "openai");
    }

    #[test]
    fn test_ask_parsing() {
        let cli =
            Cli::try_parse_from(["agentforge", "ask", "hello there", "--max-tokens", "32"]).unwrap();
        match cli.command {
            Some(Commands::Ask { prompt, max_tokens }) => {
                assert_eq!(prompt, "hello there");
                assert_eq!(max_tokens, 32);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_does_not_touch_server_settings() {
        let cli = Cli::try_parse_from(["agentforge", "ask", "hi"]).unwrap();
        let mut config = Config::default();
        config.server.port = 1234;
        cli.apply_overrides(&mut config);
        assert_eq!(config.server.port, 1234);
    }

    #[test]
    fn test_blank_provider_flag_keeps_default() {
        let cli = Cli::try_parse_from(["agentforge", "--provider", ""]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_ok());
        assert_eq!(config.provider, "mock");
    }

    #[test]
    fn test_empty_provider_env_resolves_to_mock() {
        // SAFETY: PROVIDER is only written by this test
        unsafe {
            std::env::set_var("PROVIDER", "");
        }
        let cli = Cli::try_parse_from(["agentforge"]);
        unsafe {
            std::env::remove_var("PROVIDER");
        }

        let mut config = Config::default();
        cli.unwrap().apply_overrides(&mut config);
        assert!(config.validate().is_ok());

        let resolved = crate::server::resolve_active(&config).unwrap();
        assert_eq!(resolved.resolved, "mock");
        assert_eq!(resolved.provider.id(), "mock");
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        assert!(Cli::try_parse_from(["agentforge", "ask", "hi", "--max-tokens", "0"]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["agentforge", "run", "--port", "notaport"]).is_err());
    }
}
