use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value;

use gantry_mcp::jsonrpc::{INTERNAL_ERROR, SERVER_ERROR};
use gantry_mcp::JsonRpcResponse;

use crate::app_state::AppState;

/// Handle a JSON-RPC request on `POST /mcp`.
///
/// The body is taken as raw bytes so the JSON-RPC layer controls the
/// whole failure surface: an unparseable body is the one transport-level
/// fault (HTTP 500, `-32603`); everything parseable, including envelope
/// violations and tool failures, comes back as HTTP 200 with the error
/// in the JSON-RPC response itself.
pub async fn mcp_request(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<JsonRpcResponse>) {
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse request body as JSON");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JsonRpcResponse::error(
                    Value::Null,
                    INTERNAL_ERROR,
                    format!("Internal server error: {e}"),
                )),
            );
        }
    };

    (StatusCode::OK, Json(state.server.handle(raw)))
}

/// GET and DELETE on the JSON-RPC endpoint are not part of the protocol.
pub async fn mcp_method_not_allowed() -> (StatusCode, Json<JsonRpcResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(JsonRpcResponse::error(
            Value::Null,
            SERVER_ERROR,
            "Method not allowed.",
        )),
    )
}
