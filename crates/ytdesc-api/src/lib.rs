//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /get-description` and `POST /extract-companies-links-txt`
//! - Permissive CORS, request ids and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::LinkExtractor;
pub use state::AppState;
