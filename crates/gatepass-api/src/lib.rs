//! # gatepass-api
//!
//! HTTP API layer for Gatepass built on Axum.
//!
//! Provides the endpoints, middleware (request logging, CORS, compression),
//! extractors, DTOs, and the mapping from `AppError` to plain-text responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
