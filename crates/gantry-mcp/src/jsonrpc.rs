use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Value,
    pub method: String,
    #[serde(default = "empty_params")]
    pub params: Value,
}

fn empty_params() -> Value {
    Value::Object(serde_json::Map::new())
}

impl JsonRpcRequest {
    /// Build an outbound request (client side).
    #[must_use]
    pub fn new(method: impl Into<String>, params: Value, id: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response. Constructed only through [`success`] and
/// [`error`], so exactly one of `result`/`error` is ever present.
///
/// [`success`]: JsonRpcResponse::success
/// [`error`]: JsonRpcResponse::error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    #[must_use]
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self::with_error(id, JsonRpcError::new(code, message))
    }

    /// Create an error response from an existing error object.
    #[must_use]
    pub fn with_error(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
/// Generic server/tool execution error.
pub const SERVER_ERROR: i64 = -32000;

const INVALID_REQUEST_MESSAGE: &str =
    r#"Invalid JSON-RPC 2.0 Request: Check "jsonrpc", "method", and "id" fields."#;

/// Validate a raw inbound payload into a [`JsonRpcRequest`].
///
/// Rules, in order: the payload must be a JSON object, `jsonrpc` must
/// equal `"2.0"`, and `method` must be a non-empty string. Violations
/// yield a ready-made `-32600` response whose `id` is the inbound `id`
/// when present, else null. An absent or null `params` becomes an empty
/// object so downstream handlers never see it as missing.
pub fn validate(raw: Value) -> Result<JsonRpcRequest, Box<JsonRpcResponse>> {
    let Some(body) = raw.as_object() else {
        return Err(Box::new(JsonRpcResponse::error(
            Value::Null,
            INVALID_REQUEST,
            INVALID_REQUEST_MESSAGE,
        )));
    };

    let id = body.get("id").cloned().unwrap_or(Value::Null);

    if body.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Err(Box::new(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            INVALID_REQUEST_MESSAGE,
        )));
    }

    let method = match body.get("method").and_then(Value::as_str) {
        Some(method) if !method.is_empty() => method.to_string(),
        _ => {
            return Err(Box::new(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                INVALID_REQUEST_MESSAGE,
            )))
        }
    };

    let params = match body.get("params") {
        None | Some(Value::Null) => empty_params(),
        Some(params) => params.clone(),
    };

    Ok(JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id,
        method,
        params,
    })
}
