//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // /api/influencers sets its own CORS headers
    let api = Router::new()
        .route("/api/search", post(handlers::search))
        .route("/api/export", get(handlers::export_csv))
        .layer(cors);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/influencers/:id", get(handlers::detail))
        // API routes
        .route(
            "/api/influencers",
            get(handlers::list_influencers).options(handlers::influencers_preflight),
        )
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(CompressionLayer::new())
        .with_state(state)
}
