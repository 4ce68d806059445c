//! HTTP API Layer
//!
//! This crate provides the REST API and HTML shells for the lost-and-found
//! system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: public item/claim surface and the internal staff panel
//! - **DTOs**: the two preserved wire shapes (public English, internal
//!   Portuguese)
//! - **Middleware**: request logging
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, items, pages};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // HTML shells
    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/interno", get(pages::internal_dashboard));

    // Liveness/readiness
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Public item surface
    let public_item_routes = Router::new()
        .route("/", get(items::list_public).post(items::create_public))
        .route("/:id", delete(items::mark_returned))
        .route("/:id/reivindicar", post(claims::create_claim));

    // Internal panel; distinguished by path only, there is no auth layer
    let internal_item_routes = Router::new()
        .route("/", get(items::list_internal).post(items::create_internal))
        .route("/:id", post(items::update_item))
        .route("/:id/estoque", post(items::back_to_stock));

    let internal_claim_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id/status", post(claims::update_claim_status));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .nest("/api/itens", public_item_routes)
        .nest("/api/interno/itens", internal_item_routes)
        .nest("/api/interno/reivindicacoes", internal_claim_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
