use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of tool output. Always delivered as part of an array so a
/// single result can grow into multiple blocks later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Result of a single tool invocation, in the shape the `tools/call`
/// method puts on the wire. Created once per invocation and never
/// mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The JSON-RPC request id of the originating `tools/call`.
    pub tool_call_id: Value,
    pub role: String,
    pub name: String,
    pub content: Vec<ContentBlock>,
    pub is_error: bool,
}

impl ToolResult {
    /// Build a result carrying a single text block.
    #[must_use]
    pub fn text(
        tool_call_id: Value,
        name: impl Into<String>,
        text: impl Into<String>,
        is_error: bool,
    ) -> Self {
        Self {
            tool_call_id,
            role: "tool".to_string(),
            name: name.into(),
            content: vec![ContentBlock::text(text)],
            is_error,
        }
    }

    /// The text of the first content block, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| match block {
            ContentBlock::Text { text } => text.as_str(),
        })
    }
}
