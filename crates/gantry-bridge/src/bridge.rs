use serde_json::Value;

use crate::chat::{ChatClient, ChatMessage, ChatRequest, ToolSpec};
use crate::error::Error;
use crate::mcp_client::McpClient;

/// Returned when the model asks for another round of tool calls after
/// the one round this bridge supports.
pub const SECOND_TOOL_CALL_ADVISORY: &str = "I attempted to perform your request, but the AI \
    suggested another tool call after the first, which is not currently handled in this turn. \
    Please try rephrasing.";

/// Returned when a turn ends with neither content nor tool calls.
pub const NO_RESPONSE_FALLBACK: &str =
    "I'm sorry, I couldn't produce a response to your request.";

/// Bridges a user query to the chat-completion service, executing any
/// tool calls the model requests against the MCP tool server.
pub struct Bridge {
    chat: ChatClient,
    mcp: McpClient,
    model: String,
}

impl Bridge {
    #[must_use]
    pub fn new(chat: ChatClient, mcp: McpClient, model: impl Into<String>) -> Self {
        Self {
            chat,
            mcp,
            model: model.into(),
        }
    }

    /// Answer a user query. Always produces readable text: tool-level
    /// failures become conversation content, and the fixed fallback
    /// strings cover the degenerate model responses. Only envelope-level
    /// failures (unreachable chat service, discovery failure) surface as
    /// errors.
    pub async fn answer(&self, query: &str) -> Result<String, Error> {
        // Phase 1: discovery + first turn, tool choice left to the model.
        let tools = self.mcp.list_tools().await?;
        tracing::debug!(count = tools.len(), "discovered tools");
        let specs: Vec<ToolSpec> = tools.iter().map(ToolSpec::function).collect();

        let mut messages = vec![ChatMessage::user(query)];

        let first = self
            .chat
            .complete(&ChatRequest {
                model: self.model.clone(),
                messages: messages.clone(),
                tools: Some(specs),
                tool_choice: Some("auto".to_string()),
            })
            .await?;

        if !first.has_tool_calls() {
            return Ok(first
                .content
                .filter(|content| !content.is_empty())
                .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()));
        }

        // Phase 2: execute every requested call in model order, then ask
        // the model to conclude. The tool list is not re-offered.
        let tool_calls = first.tool_calls.clone().unwrap_or_default();
        messages.push(ChatMessage::assistant(first));

        for call in &tool_calls {
            let arguments = parse_arguments(&call.function.arguments);
            tracing::info!(tool = %call.function.name, id = %call.id, "executing tool call");

            let output = self.mcp.call_tool(&call.function.name, &arguments).await;
            messages.push(ChatMessage::tool(&call.id, &call.function.name, output));
        }

        let second = self
            .chat
            .complete(&ChatRequest {
                model: self.model.clone(),
                messages,
                tools: None,
                tool_choice: None,
            })
            .await?;

        if let Some(content) = second.content.as_ref().filter(|content| !content.is_empty()) {
            return Ok(content.clone());
        }
        if second.has_tool_calls() {
            tracing::warn!("model requested a second round of tool calls");
            return Ok(SECOND_TOOL_CALL_ADVISORY.to_string());
        }
        Ok(NO_RESPONSE_FALLBACK.to_string())
    }
}

/// Arguments arrive as a JSON string from the model. Anything that does
/// not parse to an object degrades to empty arguments rather than
/// failing the call.
fn parse_arguments(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn arguments_parse_to_object() {
        assert_eq!(
            parse_arguments(r#"{"amount": 2}"#),
            json!({"amount": 2})
        );
    }

    #[test]
    fn bad_arguments_degrade_to_empty_object() {
        assert_eq!(parse_arguments("not json"), json!({}));
        assert_eq!(parse_arguments("[1,2]"), json!({}));
        assert_eq!(parse_arguments("null"), json!({}));
        assert_eq!(parse_arguments(""), json!({}));
    }
}
