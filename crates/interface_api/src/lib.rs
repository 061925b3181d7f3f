//! HTTP API Layer
//!
//! This crate provides the read API behind the claims and applications
//! dashboard, using Axum.
//!
//! # Architecture
//!
//! - **Service**: [`DashboardService`] assembles responses from row store lookups
//! - **Handlers**: Thin request handlers per resource
//! - **Middleware**: Request ids, tracing, request logging, CORS
//! - **DTOs**: Response bodies
//! - **Error Handling**: `{"error": ...}` bodies for every failure
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(store), Arc::new(ThreadRandom), config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod service;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{Random, RowStore};

use crate::config::ApiConfig;
use crate::handlers::{applications, claims, health};
use crate::middleware::request_logging;

pub use crate::service::{AssemblyError, DashboardService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardService,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the state from a store handle and a random source
    pub fn new(store: Arc<dyn RowStore>, random: Arc<dyn Random>, config: ApiConfig) -> Self {
        Self {
            dashboard: DashboardService::new(store, random),
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared handler state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    Router::new()
        .merge(health_routes)
        .route("/claims", get(claims::list_claims))
        .route("/claims/:id", get(claims::get_claim))
        .route("/applications", get(applications::list_applications))
        .route("/applications/:id", get(applications::get_application))
        .fallback(handlers::not_found)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
