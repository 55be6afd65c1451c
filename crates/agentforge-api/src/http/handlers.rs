//! Generate and health handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use agentforge_protocols::provider::{GenerateOptions, NormalizedResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Completion budget when the request omits `max_tokens`.
pub const DEFAULT_MAX_TOKENS: i64 = 256;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text. Absent and empty are both rejected.
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: i64,
}

fn default_max_tokens() -> i64 {
    DEFAULT_MAX_TOKENS
}

impl GenerateRequest {
    /// Validate the request and split it into prompt and options.
    ///
    /// The prompt is checked first so an empty prompt is always rejected,
    /// whatever `max_tokens` holds.
    pub fn into_parts(self) -> Result<(String, GenerateOptions), ApiError> {
        let prompt = self
            .prompt
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::Validation("prompt required".to_string()))?;

        let max_tokens = u32::try_from(self.max_tokens)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ApiError::Validation("max_tokens must be a positive integer".to_string())
            })?;

        Ok((prompt, GenerateOptions::default().with_max_tokens(max_tokens)))
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
}

/// Liveness check reporting the configured provider name.
///
/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: state.configured_provider().to_string(),
    })
}

/// Generate a completion with the active provider.
///
/// POST /generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<NormalizedResult>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let (prompt, options) = req.into_parts()?;

    info!(
        provider = state.runner().provider_id(),
        prompt_chars = prompt.chars().count(),
        max_tokens = options.max_tokens,
        "Generate request"
    );

    let result = state.runner().ask(&prompt, options).await?;
    Ok(Json(result))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
