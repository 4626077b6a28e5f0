use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use gantry_core::Error;

/// Definition of a tool exposed through `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Handler for a registered tool: a pure function from a JSON arguments
/// object to a JSON-serializable output, or a domain failure message.
pub type ToolHandler = Box<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// What a tool invocation produced. Tool-domain failures (unknown tool,
/// handler failure) are carried here as data, never as envelope errors,
/// so the calling LLM conversation can see and react to the text.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub output: Value,
    pub is_error: bool,
}

struct RegisteredTool {
    definition: ToolDefinition,
    handler: ToolHandler,
}

/// Registry of invocable tools, keyed by name. Registration order is
/// preserved so `tools/list` responses are deterministic.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. Fails if the name is already taken; definitions are
    /// immutable once registered.
    pub fn register<H>(&mut self, definition: ToolDefinition, handler: H) -> Result<(), Error>
    where
        H: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        if self.tools.iter().any(|t| t.definition.name == definition.name) {
            return Err(Error::DuplicateTool(definition.name));
        }
        self.tools.push(RegisteredTool {
            definition,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// All definitions, in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    /// Invoke a tool by name. An unknown name or a failing handler is a
    /// domain-level failure reported in the outcome, distinct from the
    /// JSON-RPC method-not-found error.
    pub fn invoke(&self, name: &str, arguments: &Value) -> ToolOutcome {
        let Some(tool) = self.tools.iter().find(|t| t.definition.name == name) else {
            tracing::warn!(tool = name, "attempted to call unknown tool");
            return ToolOutcome {
                output: json!({"error": format!("Tool not found: {name}")}),
                is_error: true,
            };
        };

        match (tool.handler)(arguments) {
            Ok(output) => ToolOutcome {
                output,
                is_error: false,
            },
            Err(message) => {
                tracing::warn!(tool = name, error = %message, "tool execution failed");
                ToolOutcome {
                    output: json!({
                        "error": format!("Error executing tool '{name}': {message}")
                    }),
                    is_error: true,
                }
            }
        }
    }
}
