//! MCP Protocol Edge Case Tests
//!
//! Drives the handler and the line-delimited stdio loop end to end:
//! - malformed JSON and non-2.0 envelopes
//! - protocol version negotiation
//! - notifications that must stay silent
//! - tool calls routed to case tools and marketplace actions

mod common;

use common::*;
use serde_json::{json, Value};
use soar_mcp::mcp::*;
use soar_mcp::{ActionInvoker, IntegrationRegistry, ScopeAllowList};
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// -----------------------------------------------------------------------------
// Test Helpers
// -----------------------------------------------------------------------------

fn handler_for(server: &MockServer, integrations: &[&str]) -> McpHandler {
    let invoker = ActionInvoker::new(client_for(server), ScopeAllowList::new(scopes()));
    McpHandler::new(invoker, IntegrationRegistry::from_names(integrations))
}

fn request(id: i64, method: &str, params: Value) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(JsonRpcId::Number(id)),
        method: method.to_string(),
        params,
    }
}

/// Feed `input` through the stdio loop and decode every response line
async fn serve_lines(handler: McpHandler, input: &str) -> Vec<Value> {
    let server = McpStdioServer::new(handler);
    let mut output: Vec<u8> = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.expect("serve loop succeeds");

    String::from_utf8(output)
        .expect("output is UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("response line is JSON"))
        .collect()
}

/// Response with the given id; responses may arrive in any order
fn by_id<'a>(responses: &'a [Value], id: Value) -> &'a Value {
    responses.iter().find(|r| r["id"] == id).unwrap_or_else(|| panic!("no response for id {}", id))
}

fn tool_text(response: &JsonRpcResponse) -> Value {
    let result = response.result.as_ref().expect("tool call succeeded");
    let text = result["content"][0]["text"].as_str().expect("text content");
    serde_json::from_str(text).expect("tool text is JSON")
}

// -----------------------------------------------------------------------------
// Version negotiation
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_initialize_negotiates_supported_versions() {
    let server = MockServer::start().await;

    for (requested, expected) in [
        ("2024-11-05", "2024-11-05"),
        ("2025-03-26", "2025-03-26"),
        ("2025-06-18", "2025-06-18"),
        ("2025-01-01", "2024-11-05"),
        ("2030-01-01", PROTOCOL_VERSION),
    ] {
        let handler = handler_for(&server, &[]);
        let response = handler
            .handle_request(request(1, "initialize", json!({"protocolVersion": requested})))
            .await
            .unwrap();
        assert_eq!(response.result.unwrap()["protocolVersion"], expected, "for {}", requested);
    }
}

#[tokio::test]
async fn test_initialize_without_params() {
    let server = MockServer::start().await;
    let handler = handler_for(&server, &[]);

    let response = handler.handle_request(request(1, "initialize", Value::Null)).await.unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], soar_mcp::SERVER_NAME);
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_initialize_rejects_malformed_params() {
    let server = MockServer::start().await;
    let handler = handler_for(&server, &[]);

    let response = handler
        .handle_request(request(1, "initialize", json!({"protocolVersion": 2025})))
        .await
        .unwrap();
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    assert!(!handler.is_initialized());
}

// -----------------------------------------------------------------------------
// Tool calls
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_tools_list_includes_enabled_integrations() {
    let server = MockServer::start().await;
    let handler = handler_for(&server, &["misp", "Sentinel One V2", "NotAThing"]);

    let response = handler.handle_request(request(1, "tools/list", Value::Null)).await.unwrap();
    let result = response.result.unwrap();
    let names: Vec<&str> =
        result["tools"].as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();

    assert!(names.contains(&"list_cases"));
    assert!(names.contains(&"misp_create_event"));
    assert!(names.iter().any(|name| name.starts_with("sentinel_one_v2_")));
    assert!(!names.iter().any(|name| name.starts_with("exchange_")));

    let create_event =
        result["tools"].as_array().unwrap().iter().find(|t| t["name"] == "misp_create_event").unwrap();
    assert_eq!(create_event["inputSchema"]["properties"]["scope"]["default"], "All entities");
}

#[tokio::test]
async fn test_tools_call_runs_marketplace_action() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(json!({"executed": true}))).await;

    let handler = handler_for(&server, &["MISP"]);
    let response = handler
        .handle_request(request(
            2,
            "tools/call",
            json!({
                "name": "misp_create_event",
                "arguments": {
                    "case_id": "42",
                    "alert_group_identifiers": ["grp"],
                    "event_name": "Phish"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(tool_text(&response), json!({"executed": true}));
    assert!(response.result.unwrap().get("isError").is_none());
}

#[tokio::test]
async fn test_tools_call_failed_action_is_still_a_result() {
    let server = MockServer::start().await;
    let handler = handler_for(&server, &["MISP"]);

    let response = handler
        .handle_request(request(
            3,
            "tools/call",
            json!({
                "name": "misp_ping",
                "arguments": {"case_id": "1", "alert_group_identifiers": [], "scope": "Bogus"}
            }),
        ))
        .await
        .unwrap();

    assert!(response.error.is_none());
    let value = tool_text(&response);
    assert_eq!(value["Status"], "Failed");
    assert!(value["Message"].as_str().unwrap().starts_with("Invalid scope 'Bogus'"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tools_call_routes_case_tools() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1p/external/v1/cases/5/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server, &[]);
    let response = handler
        .handle_request(request(
            4,
            "tools/call",
            json!({"name": "post_case_comment", "arguments": {"case_id": "5", "comment": "hi"}}),
        ))
        .await
        .unwrap();

    assert_eq!(tool_text(&response), json!({"id": 1}));
}

#[tokio::test]
async fn test_tools_call_error_codes() {
    let server = MockServer::start().await;
    let handler = handler_for(&server, &["MISP"]);

    let cases = [
        (json!({"name": "no_such_tool", "arguments": {}}), error_codes::METHOD_NOT_FOUND),
        (json!({"arguments": {}}), error_codes::INVALID_PARAMS),
        (json!({"name": "misp_ping", "arguments": {"case_id": "1"}}), error_codes::INVALID_PARAMS),
        (json!({"name": "post_case_comment", "arguments": {"case_id": "1"}}), error_codes::INVALID_PARAMS),
        (json!({"name": "misp_ping", "arguments": "case 1"}), error_codes::INVALID_PARAMS),
    ];

    for (i, (params, code)) in cases.into_iter().enumerate() {
        let response =
            handler.handle_request(request(i as i64, "tools/call", params.clone())).await.unwrap();
        assert_eq!(response.error.expect("error response").code, code, "params: {}", params);
    }
}

// -----------------------------------------------------------------------------
// Stdio loop
// -----------------------------------------------------------------------------

#[tokio::test]
async fn test_stdio_session() {
    let server = MockServer::start().await;
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-06-18"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":"two","method":"ping"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/list"}"#,
        "\n",
    );

    let responses = serve_lines(handler_for(&server, &[]), input).await;

    assert_eq!(responses.len(), 3);
    assert_eq!(by_id(&responses, json!(1))["result"]["protocolVersion"], "2025-06-18");
    assert_eq!(*by_id(&responses, json!("two")), json!({"jsonrpc": "2.0", "id": "two", "result": {}}));
    assert_eq!(by_id(&responses, json!(3))["result"]["tools"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_stdio_parse_error_keeps_serving() {
    let server = MockServer::start().await;
    let input = "{not json\n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n";

    let responses = serve_lines(handler_for(&server, &[]), input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(by_id(&responses, Value::Null)["error"]["code"], error_codes::PARSE_ERROR);
    assert!(by_id(&responses, json!(9)).get("error").is_none());
}

#[tokio::test]
async fn test_stdio_rejects_wrong_jsonrpc_version() {
    let server = MockServer::start().await;
    let input = "{\"jsonrpc\":\"1.0\",\"id\":1,\"method\":\"ping\"}\n";

    let responses = serve_lines(handler_for(&server, &[]), input).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["error"]["code"], error_codes::INVALID_REQUEST);
}

#[tokio::test]
async fn test_stdio_unknown_notification_is_silent() {
    let server = MockServer::start().await;
    let input = "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/progress\",\"params\":{}}\n";

    let responses = serve_lines(handler_for(&server, &[]), input).await;

    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_stdio_slow_tool_call_does_not_block_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(instances_path("MISP")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"integration_instances": [{"identifier": "misp-prod"}]}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(json!({"done": true}))).await;

    let (client_io, server_io) = tokio::io::duplex(64 * 1024);
    let (server_read, mut server_write) = tokio::io::split(server_io);
    let stdio = McpStdioServer::new(handler_for(&server, &["MISP"]));
    let serving = tokio::spawn(async move {
        stdio.serve(BufReader::new(server_read), &mut server_write).await
    });

    let (client_read, mut client_write) = tokio::io::split(client_io);
    let started = Instant::now();
    client_write
        .write_all(
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"misp_ping","arguments":{"case_id":"1","alert_group_identifiers":[]}}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
                "\n",
            )
            .as_bytes(),
        )
        .await
        .unwrap();

    let mut lines = BufReader::new(client_read).lines();
    let first: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(first["id"], 2, "ping must not wait for the slow tool call");
    assert!(started.elapsed() < Duration::from_secs(2));

    let second: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
    assert_eq!(second["id"], 1);
    assert!(second["result"]["content"][0]["text"].as_str().unwrap().contains("done"));

    client_write.shutdown().await.unwrap();
    serving.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_stdio_waits_for_in_flight_requests_at_eof() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"done": true}))
            .set_delay(Duration::from_millis(300)),
    )
    .await;

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"misp_ping","arguments":{"case_id":"1","alert_group_identifiers":[]}}}"#,
        "\n",
    );
    let responses = serve_lines(handler_for(&server, &["MISP"]), input).await;

    assert_eq!(responses.len(), 1);
    assert!(by_id(&responses, json!(1))["result"].is_object());
}
