use std::sync::Arc;

use gantry_mcp::ToolServer;

/// Shared application state. The façade owns the tool registry; the
/// counter behind the demo tools is shared into their handlers at
/// registration time.
#[derive(Clone)]
pub struct AppState {
    pub server: Arc<ToolServer>,
}
