use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use gantry_core::Counter;
use gantry_mcp::{ToolRegistry, ToolServer};
use gantry_server::app_state::AppState;
use gantry_server::tools;

fn build_test_app() -> TestServer {
    let counter = Arc::new(Counter::new());
    let mut registry = ToolRegistry::new();
    tools::register_counter_tools(&mut registry, &counter).unwrap();

    let state = AppState {
        server: Arc::new(ToolServer::new("gantry", "0.1.0", registry)),
    };

    let app = gantry_server::router::create_router(state);
    TestServer::new(app).unwrap()
}

fn rpc(method: &str, params: Value, id: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

fn tool_output(body: &Value) -> Value {
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[tokio::test]
async fn health_check() {
    let server = build_test_app();
    let resp = server.get("/health").await;
    resp.assert_status_ok();
}

#[tokio::test]
async fn initialize_reports_server_identity() {
    let server = build_test_app();

    let resp = server
        .post("/mcp")
        .json(&rpc("initialize", json!({}), json!(1)))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["result"]["serverInfo"]["name"], "gantry");
    assert_eq!(body["result"]["capabilities"]["supportsToolsList"], true);
    assert_eq!(body["result"]["capabilities"]["supportsToolsCall"], true);
}

#[tokio::test]
async fn tools_list_is_fixed_and_ordered() {
    let server = build_test_app();

    let resp = server
        .post("/mcp")
        .json(&rpc("tools/list", json!({}), json!(1)))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let tools = body["result"]["tools"].as_array().unwrap();

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["increment", "status", "reset"]);

    for tool in tools {
        assert_eq!(
            tool["inputSchema"],
            json!({"type": "object", "properties": {}, "required": []})
        );
        assert!(tool["description"].as_str().unwrap().ends_with('.'));
    }
}

#[tokio::test]
async fn increment_twice_then_reset() {
    let server = build_test_app();

    let call = |id: i64| {
        rpc(
            "tools/call",
            json!({"name": "increment", "arguments": {}}),
            json!(id),
        )
    };

    let body: Value = server.post("/mcp").json(&call(1)).await.json();
    assert_eq!(tool_output(&body)["value"], 1);
    assert_eq!(body["result"]["is_error"], false);

    let body: Value = server.post("/mcp").json(&call(2)).await.json();
    assert_eq!(tool_output(&body)["value"], 2);

    let body: Value = server
        .post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "reset", "arguments": {}}),
            json!(3),
        ))
        .await
        .json();
    let output = tool_output(&body);
    assert_eq!(output["value"], 0);
    assert_eq!(output["message"], "Counter reset.");
}

#[tokio::test]
async fn unknown_tool_leaves_counter_untouched() {
    let server = build_test_app();

    server
        .post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "increment", "arguments": {}}),
            json!(1),
        ))
        .await
        .assert_status_ok();

    let resp = server
        .post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "decrement", "arguments": {}}),
            json!(2),
        ))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["result"]["is_error"], true);
    assert_eq!(tool_output(&body)["error"], "Tool not found: decrement");

    // counter unchanged by the failed call
    let body: Value = server
        .post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "status", "arguments": {}}),
            json!(3),
        ))
        .await
        .json();
    assert_eq!(tool_output(&body)["value"], 1);
}

#[tokio::test]
async fn tools_call_without_name_is_invalid_params() {
    let server = build_test_app();

    let resp = server
        .post("/mcp")
        .json(&rpc("tools/call", json!({"arguments": {}}), json!(1)))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let server = build_test_app();

    let resp = server
        .post("/mcp")
        .json(&rpc("tools/prune", json!({}), json!(1)))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32601);
}

#[tokio::test]
async fn response_id_matches_request_id() {
    let server = build_test_app();

    for id in [json!(17), json!("client-abc"), json!(null)] {
        let body: Value = server
            .post("/mcp")
            .json(&rpc("tools/list", json!({}), id.clone()))
            .await
            .json();
        assert_eq!(body["id"], id);
    }
}

#[tokio::test]
async fn missing_version_or_method_is_invalid_request() {
    let server = build_test_app();

    let resp = server
        .post("/mcp")
        .json(&json!({"id": 1, "method": "tools/list"}))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], 1);

    let resp = server
        .post("/mcp")
        .json(&json!({"jsonrpc": "2.0", "id": 2}))
        .await;
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32600);
}

#[tokio::test]
async fn non_object_payload_is_invalid_request_with_null_id() {
    let server = build_test_app();

    let resp = server.post("/mcp").text("5").await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let server = build_test_app();

    let resp = server.post("/mcp").text("{not json").await;
    resp.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["id"], Value::Null);
}

#[tokio::test]
async fn get_and_delete_are_method_not_allowed() {
    let server = build_test_app();

    let resp = server.get("/mcp").await;
    resp.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32000);
    assert_eq!(body["error"]["message"], "Method not allowed.");
    assert_eq!(body["id"], Value::Null);

    let resp = server.delete("/mcp").await;
    resp.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], -32000);
}

#[tokio::test]
async fn get_current_time_is_parseable() {
    let server = build_test_app();

    let body: Value = server
        .post("/mcp")
        .json(&rpc("getCurrentTime", json!({}), json!(1)))
        .await
        .json();

    let text = body["result"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(text).is_ok());
}

#[tokio::test]
async fn echo_round_trips_params() {
    let server = build_test_app();

    let params = json!({"probe": true, "values": [1, "two", null]});
    let body: Value = server
        .post("/mcp")
        .json(&rpc("echo", params.clone(), json!("diag")))
        .await
        .json();

    assert_eq!(body["result"], params);
    assert_eq!(body["id"], "diag");
}
