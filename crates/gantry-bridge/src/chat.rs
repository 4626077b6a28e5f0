use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use gantry_mcp::registry::ToolDefinition;

use crate::error::Error;

/// Chat-completion calls are the only genuinely long-latency operation
/// in a bridge turn; they are bounded so a stuck upstream fails the
/// turn instead of hanging it.
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Request body for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

/// One role-tagged entry in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Echo the model's own tool-call message back into the transcript.
    #[must_use]
    pub fn assistant(message: AssistantMessage) -> Self {
        Self {
            role: "assistant".to_string(),
            content: message.content,
            tool_calls: message.tool_calls,
            tool_call_id: None,
            name: None,
        }
    }

    /// A tool result entry, tied to the tool call that requested it.
    #[must_use]
    pub fn tool(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
            name: Some(name.into()),
        }
    }
}

/// A tool offered to the model, in function-calling form.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolSpec {
    /// Map a discovered tool definition into the model's schema. The
    /// tool's own input schema is used when it is an object; otherwise
    /// the minimal empty-parameters shape is offered.
    #[must_use]
    pub fn function(definition: &ToolDefinition) -> Self {
        let parameters = if definition.input_schema.is_object() {
            definition.input_schema.clone()
        } else {
            json!({"type": "object", "properties": {}, "required": []})
        };

        Self {
            kind: "function".to_string(),
            function: FunctionSpec {
                name: definition.name.clone(),
                description: definition.description.clone(),
                parameters,
            },
        }
    }
}

/// Response body of a chat completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

/// The model's message in a choice: direct content, tool-call requests,
/// or (degenerate) neither. Some client stacks camel-case `tool_calls`,
/// so both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "toolCalls")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl AssistantMessage {
    #[must_use]
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_ref().is_some_and(|calls| !calls.is_empty())
    }
}

/// A model-issued request to invoke a named function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: FunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, exactly as produced by the model.
    pub arguments: String,
}

/// Minimal client for an OpenAI-compatible chat-completion service.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    /// `base_url` is the API root, e.g. `https://api.openai.com/v1`.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(CHAT_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Submit a completion request and return the first choice's message.
    pub async fn complete(&self, request: &ChatRequest) -> Result<AssistantMessage, Error> {
        let mut builder = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response: ChatResponse = builder
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(Error::NoChoices)
    }
}
