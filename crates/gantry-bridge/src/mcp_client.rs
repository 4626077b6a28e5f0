use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use gantry_core::ToolResult;
use gantry_mcp::registry::ToolDefinition;
use gantry_mcp::{JsonRpcRequest, JsonRpcResponse};

use crate::error::Error;

/// Tool invocations are in-memory operations on the server side; a
/// short bound is enough.
const MCP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ToolsListResult {
    tools: Vec<ToolDefinition>,
}

/// HTTP client for an MCP-style JSON-RPC tool server.
pub struct McpClient {
    http: reqwest::Client,
    url: String,
}

impl McpClient {
    /// `url` is the JSON-RPC endpoint itself, e.g. `http://localhost:3000/mcp`.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(MCP_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest::new(method, params, json!(Uuid::new_v4().to_string()))
    }

    /// Discover the server's tools. A failure here means the bridge has
    /// nothing to offer the model, so it is a hard error.
    pub async fn list_tools(&self) -> Result<Vec<ToolDefinition>, Error> {
        let response: JsonRpcResponse = self
            .http
            .post(&self.url)
            .json(&Self::request("tools/list", json!({})))
            .send()
            .await
            .map_err(|e| Error::ToolDiscovery(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::ToolDiscovery(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(Error::ToolDiscovery(error.message));
        }

        let result = response
            .result
            .ok_or_else(|| Error::ToolDiscovery("response carried no result".to_string()))?;
        let listing: ToolsListResult = serde_json::from_value(result)
            .map_err(|e| Error::ToolDiscovery(format!("malformed tools/list result: {e}")))?;

        Ok(listing.tools)
    }

    /// Invoke a tool and return its text output.
    ///
    /// This never fails: transport problems and malformed responses are
    /// rendered into the returned text, so the conversation transcript
    /// always gets a tool message for every tool-call request.
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> String {
        let request = Self::request(
            "tools/call",
            json!({"name": name, "arguments": arguments}),
        );

        let response = match self.http.post(&self.url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => return format!("Error calling MCP server: {e}"),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return format!("Error calling MCP server: {e}"),
        };

        if !status.is_success() {
            return format!(
                "Error calling MCP server: HTTP Code: {}, Response: {body}",
                status.as_u16()
            );
        }

        Self::extract_text(&body)
            .unwrap_or_else(|| {
                format!("Error: Invalid JSON-RPC response format from MCP server: {body}")
            })
    }

    /// Pull `result.content[0].text` out of a `tools/call` response.
    fn extract_text(body: &str) -> Option<String> {
        let response: JsonRpcResponse = serde_json::from_str(body).ok()?;
        let result: ToolResult = serde_json::from_value(response.result?).ok()?;
        result.first_text().map(ToString::to_string)
    }
}
