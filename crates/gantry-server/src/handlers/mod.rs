mod health;
mod mcp;

pub use health::health;
pub use mcp::{mcp_method_not_allowed, mcp_request};
