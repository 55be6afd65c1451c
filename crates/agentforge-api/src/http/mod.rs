//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Health checks
//! - Prompt generation

pub mod handlers;
pub mod routes;
