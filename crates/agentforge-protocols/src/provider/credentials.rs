//! API key resolution shared by vendor adapters.

use crate::error::ProviderError;

/// Pick the explicit key, else the environment value. Empty strings count as
/// absent.
pub fn select_api_key(explicit: Option<String>, from_env: Option<String>) -> Option<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_env.filter(|k| !k.trim().is_empty()))
}

/// Resolve an API key from an explicit value or the `env_var` environment
/// variable.
pub fn require_api_key(explicit: Option<String>, env_var: &str) -> Result<String, ProviderError> {
    select_api_key(explicit, std::env::var(env_var).ok()).ok_or_else(|| {
        ProviderError::Configuration(format!(
            "{env_var} not found. Set it in your environment or pass api_key."
        ))
    })
}
