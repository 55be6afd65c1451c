//! Application state.

use agentforge_core::Runner;

/// Application state shared across handlers.
///
/// Read-only after startup; every request shares the same runner.
pub struct AppState {
    /// Provider name as configured, reported by `/health` even when
    /// resolution fell back to the mock provider.
    configured_provider: String,
    runner: Runner,
}

impl AppState {
    pub fn new(configured_provider: impl Into<String>, runner: Runner) -> Self {
        Self {
            configured_provider: configured_provider.into(),
            runner,
        }
    }

    pub fn configured_provider(&self) -> &str {
        &self.configured_provider
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }
}
