pub mod counter;
pub mod error;
pub mod types;

pub use counter::Counter;
pub use error::Error;
pub use types::{ContentBlock, ToolResult};
