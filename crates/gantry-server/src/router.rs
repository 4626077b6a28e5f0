use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Single JSON-RPC endpoint. GET and DELETE are rejected with a
        // JSON-RPC error body rather than a bare 405.
        .route(
            "/mcp",
            post(handlers::mcp_request)
                .get(handlers::mcp_method_not_allowed)
                .delete(handlers::mcp_method_not_allowed),
        )
        // CORS: allow any origin (MCP clients may run in various contexts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
