pub mod jsonrpc;
pub mod registry;
pub mod server;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use registry::{ToolDefinition, ToolOutcome, ToolRegistry};
pub use server::ToolServer;
