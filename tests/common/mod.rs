//! Shared helpers for integration tests: a wiremock SOAR backend and clients
//! pointed at it.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use soar_mcp::soar::{ScopeAllowList, SoarClient, APP_KEY_HEADER};
use soar_mcp::{ActionInvoker, SoarConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const APP_KEY: &str = "test-app-key";
pub const EXECUTE_PATH: &str = "/api/external/v1/cases/ExecuteManualAction";
pub const SCOPES_PATH: &str = "/api/external/v1/settings/GetScopes";

pub fn scopes() -> Vec<&'static str> {
    vec!["Suspicious entities", "All entities", "All hostnames", "All IP addresses"]
}

pub fn client_for(server: &MockServer) -> Arc<SoarClient> {
    let config = SoarConfig::new(server.uri()).with_app_key(APP_KEY).with_timeout_seconds(5);
    Arc::new(SoarClient::new(&config).expect("client builds"))
}

pub fn invoker_for(server: &MockServer) -> ActionInvoker {
    ActionInvoker::new(client_for(server), ScopeAllowList::new(scopes()))
}

pub fn instances_path(integration: &str) -> String {
    format!("/api/1p/external/v1/integrations/{}/integrationInstances", integration)
}

/// Instance listing for `integration` answering with `body`
pub async fn mount_instances(server: &MockServer, integration: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(instances_path(integration)))
        .and(query_param("$select", "identifier"))
        .and(header(APP_KEY_HEADER, APP_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Instance listing with a single instance named `identifier`
pub async fn mount_single_instance(server: &MockServer, integration: &str, identifier: &str) {
    mount_instances(server, integration, json!({"integration_instances": [{"identifier": identifier}]}))
        .await;
}

/// Execute endpoint answering every POST with `response`
pub async fn mount_execute(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(EXECUTE_PATH))
        .and(header(APP_KEY_HEADER, APP_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Decoded body of the single manual-action request the backend received
pub async fn executed_request(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("request recording enabled");
    let executed: Vec<_> =
        requests.iter().filter(|r| r.url.path() == EXECUTE_PATH).collect();
    assert_eq!(executed.len(), 1, "expected exactly one execute request");
    serde_json::from_slice(&executed[0].body).expect("execute body is JSON")
}
