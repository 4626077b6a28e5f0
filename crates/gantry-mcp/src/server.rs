use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use gantry_core::ToolResult;

use crate::jsonrpc::{
    self, JsonRpcError, JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, METHOD_NOT_FOUND,
    SERVER_ERROR,
};
use crate::registry::ToolRegistry;

/// MCP protocol revision advertised by `initialize`.
pub const PROTOCOL_VERSION: &str = "2025-03-26";

type MethodHandler = fn(&ToolServer, &JsonRpcRequest) -> Result<Value, JsonRpcError>;

/// Transport-independent tool server façade. Each JSON-RPC method is an
/// entry in the method table; exposing a new method is a `route` call,
/// not a new branch.
pub struct ToolServer {
    name: String,
    version: String,
    registry: ToolRegistry,
    methods: HashMap<&'static str, MethodHandler>,
}

impl ToolServer {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: ToolRegistry) -> Self {
        let mut server = Self {
            name: name.into(),
            version: version.into(),
            registry,
            methods: HashMap::new(),
        };
        server.route("initialize", initialize);
        server.route("tools/list", tools_list);
        server.route("tools/call", tools_call);
        server.route("echo", echo);
        server.route("getCurrentTime", get_current_time);
        server
    }

    fn route(&mut self, method: &'static str, handler: MethodHandler) {
        self.methods.insert(method, handler);
    }

    /// Process one inbound message synchronously to completion.
    ///
    /// Every outcome is a well-formed JSON-RPC response: validation
    /// failures become `-32600`, unknown methods `-32601`, and method
    /// handler failures are caught here and reported with their own
    /// code. An internal fault never escapes this layer.
    pub fn handle(&self, raw: Value) -> JsonRpcResponse {
        let req = match jsonrpc::validate(raw) {
            Ok(req) => req,
            Err(resp) => {
                tracing::warn!("rejected non-conformant JSON-RPC request");
                return *resp;
            }
        };

        tracing::info!(method = %req.method, id = %req.id, "handling JSON-RPC request");

        let Some(handler) = self.methods.get(req.method.as_str()) else {
            tracing::warn!(method = %req.method, "method not found");
            return JsonRpcResponse::error(
                req.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", req.method),
            );
        };

        match handler(self, &req) {
            Ok(result) => JsonRpcResponse::success(req.id, result),
            Err(error) => JsonRpcResponse::with_error(req.id, error),
        }
    }
}

/// `initialize`: stateless and idempotent; callable any number of times.
fn initialize(server: &ToolServer, _req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    Ok(json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "supportsToolsList": true,
            "supportsToolsCall": true,
        },
        "serverInfo": {
            "name": server.name,
            "version": server.version,
        },
        "message": "MCP server initialized successfully!",
    }))
}

fn tools_list(server: &ToolServer, _req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    Ok(json!({ "tools": server.registry.list() }))
}

fn tools_call(server: &ToolServer, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    let name = req
        .params
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| JsonRpcError::new(INVALID_PARAMS, "Invalid params: tool name is required."))?;

    let arguments = req
        .params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

    let outcome = server.registry.invoke(name, &arguments);

    let text = serde_json::to_string(&outcome.output).map_err(|e| {
        JsonRpcError::new(
            SERVER_ERROR,
            format!("Internal server error during method execution: {e}"),
        )
    })?;

    let result = ToolResult::text(req.id.clone(), name, text, outcome.is_error);
    serde_json::to_value(result).map_err(|e| {
        JsonRpcError::new(
            SERVER_ERROR,
            format!("Internal server error during method execution: {e}"),
        )
    })
}

/// `echo`: returns `params` verbatim (diagnostic).
fn echo(_server: &ToolServer, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    Ok(req.params.clone())
}

/// `getCurrentTime`: RFC 3339 UTC with millisecond precision (diagnostic).
fn get_current_time(_server: &ToolServer, _req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    Ok(json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)))
}
