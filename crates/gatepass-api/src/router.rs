//! Route definitions for the Gatepass HTTP API.
//!
//! Routes sit at the root path, grouped by component. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(account_routes())
        .merge(record_routes())
        .merge(directory_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Welcome text and health check.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::welcome))
        .route("/health", get(handlers::health::health))
}

/// Admin bootstrap and login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registerAdmin", post(handlers::auth::register_admin))
        .route("/loginAdmin", post(handlers::auth::login))
        .route("/loginSecurity", post(handlers::auth::login))
}

/// Role-gated registration.
fn account_routes() -> Router<AppState> {
    Router::new().route("/registerSecurity", post(handlers::account::register))
}

/// Pass issuance.
fn record_routes() -> Router<AppState> {
    Router::new().route(
        "/issueVisitorPass",
        post(handlers::record::issue_visitor_pass),
    )
}

/// Role-scoped reads and visitor deletion.
fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/readAdmin", get(handlers::directory::read))
        .route("/readSecurity", get(handlers::directory::read))
        .route("/deleteVisitor", delete(handlers::directory::delete_visitor))
}
