pub mod bridge;
pub mod chat;
pub mod error;
pub mod mcp_client;

pub use bridge::{Bridge, NO_RESPONSE_FALLBACK, SECOND_TOOL_CALL_ADVISORY};
pub use chat::ChatClient;
pub use error::Error;
pub use mcp_client::McpClient;
