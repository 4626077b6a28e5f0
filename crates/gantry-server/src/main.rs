use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gantry_core::Counter;
use gantry_mcp::{ToolRegistry, ToolServer};
use gantry_server::app_state::AppState;
use gantry_server::tools;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("GANTRY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("GANTRY_PORT").unwrap_or_else(|_| "3000".to_string());

    let counter = Arc::new(Counter::new());
    let mut registry = ToolRegistry::new();
    tools::register_counter_tools(&mut registry, &counter)
        .expect("Failed to register counter tools");

    let state = AppState {
        server: Arc::new(ToolServer::new(
            "gantry",
            env!("CARGO_PKG_VERSION"),
            registry,
        )),
    };

    let app = gantry_server::router::create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Gantry tool server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
