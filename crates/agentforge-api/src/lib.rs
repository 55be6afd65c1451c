//! # AgentForge API
//!
//! HTTP facade translating external requests into provider calls.
//!
//! ```text
//! GET  /health    - {status, provider}
//! POST /generate  - {prompt, max_tokens?} -> NormalizedResult
//! ```
//!
//! Every `/generate` request is dispatched to the single provider instance
//! resolved at startup.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use http::{
    handlers::{GenerateRequest, HealthResponse},
    routes::create_router,
};
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
