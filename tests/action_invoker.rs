//! Integration tests for marketplace action invocation against a mocked SOAR backend.

mod common;

use common::*;
use serde_json::{json, Value};
use soar_mcp::actions::{ActionCall, ActionDescriptor, ActionResult, TargetEntity};
use soar_mcp::IntegrationRegistry;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing_test::traced_test;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn misp_action(tool_name: &str) -> &'static ActionDescriptor {
    IntegrationRegistry::from_names(["MISP"]).find(tool_name).expect("MISP action is registered")
}

fn failure_message(result: ActionResult) -> String {
    let value = result.into_value();
    let object = value.as_object().expect("failure is an object");
    assert_eq!(object.len(), 2, "failure must carry exactly Status and Message: {}", value);
    assert_eq!(object["Status"], "Failed");
    object["Message"].as_str().expect("message is a string").to_string()
}

#[tokio::test]
async fn test_invalid_scope_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let result = invoker_for(&server)
        .invoke(misp_action("misp_ping"), ActionCall::new("42", vec![]).with_scope("Not A Scope"))
        .await;

    assert_eq!(
        failure_message(result),
        "Invalid scope 'Not A Scope'. Allowed values are: All IP addresses, All entities, \
         All hostnames, Suspicious entities"
    );
}

#[tokio::test]
async fn test_empty_instance_list() {
    let server = MockServer::start().await;
    mount_instances(&server, "MISP", json!({"integration_instances": []})).await;
    Mock::given(wiremock::matchers::path(EXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    assert_eq!(failure_message(result), "No active instance found.");
}

#[tokio::test]
async fn test_missing_instance_key_counts_as_empty() {
    let server = MockServer::start().await;
    mount_instances(&server, "MISP", json!({})).await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    assert_eq!(failure_message(result), "No active instance found.");
}

#[tokio::test]
async fn test_instance_without_identifier() {
    let server = MockServer::start().await;
    mount_instances(&server, "MISP", json!({"integration_instances": [{"identifier": null}]})).await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    assert_eq!(failure_message(result), "Instance found but identifier is missing.");

    let server = MockServer::start().await;
    mount_instances(&server, "MISP", json!({"integration_instances": [{"identifier": ""}]})).await;
    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;
    assert_eq!(failure_message(result), "Instance found but identifier is missing.");
}

#[tokio::test]
async fn test_successful_dispatch_passes_response_through() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    let backend_response = json!({"id": 981, "status": "queued", "nested": {"values": [1, 2, 3]}});
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(backend_response.clone())).await;

    let call = ActionCall::new("42", vec!["grp-1".to_string()])
        .with_param("Event Name", json!("Phishing wave"))
        .with_scope("Suspicious entities");
    let result = invoker_for(&server).invoke(misp_action("misp_create_event"), call).await;

    assert_eq!(result, ActionResult::Completed(backend_response));

    let body = executed_request(&server).await;
    assert_eq!(body["caseId"], "42");
    assert_eq!(body["targetEntities"], json!([]));
    assert_eq!(body["scope"], "Suspicious entities");
    assert_eq!(body["isPredefinedScope"], true);
    assert_eq!(body["alertGroupIdentifiers"], json!(["grp-1"]));
    assert_eq!(body["actionProvider"], "Scripts");
    assert_eq!(body["actionName"], "MISP_Create Event");
    assert_eq!(body["properties"]["IntegrationInstance"], "misp-prod");
    assert_eq!(body["properties"]["ScriptName"], "MISP_Create Event");
}

#[tokio::test]
async fn test_first_instance_is_used() {
    let server = MockServer::start().await;
    mount_instances(
        &server,
        "MISP",
        json!({"integration_instances": [{"identifier": "first"}, {"identifier": "second"}]}),
    )
    .await;
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("1", vec![])).await;

    let body = executed_request(&server).await;
    assert_eq!(body["properties"]["IntegrationInstance"], "first");
}

#[tokio::test]
async fn test_explicit_entities_override_scope() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(json!({"ok": true}))).await;

    let call = misp_action("misp_ping")
        .bind(Some(json!({
            "case_id": "7",
            "alert_group_identifiers": ["g"],
            "target_entities": [{"identifier": "1.2.3.4", "type": "IPAddress"}],
            "scope": "Not A Scope"
        })))
        .unwrap();
    let result = invoker_for(&server).invoke(misp_action("misp_ping"), call).await;
    assert!(!result.is_failed());

    let body = executed_request(&server).await;
    let object = body.as_object().unwrap();
    assert!(object.contains_key("scope"));
    assert_eq!(body["scope"], Value::Null);
    assert_eq!(body["isPredefinedScope"], false);
    assert_eq!(body["targetEntities"], json!([{"Identifier": "1.2.3.4", "EntityType": "IPAddress"}]));
}

#[tokio::test]
async fn test_script_parameters_omit_unset_optionals() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(&server, ResponseTemplate::new(200).set_body_json(json!({}))).await;

    let descriptor = misp_action("misp_create_event");
    let call = descriptor
        .bind(Some(json!({
            "case_id": "42",
            "alert_group_identifiers": [],
            "event_name": "Phishing wave",
            "threat_level": "1",
            "publish": false,
            "comment": null
        })))
        .unwrap();
    invoker_for(&server).invoke(descriptor, call).await;

    let body = executed_request(&server).await;
    let encoded = body["properties"]["ScriptParametersEntityFields"].as_str().unwrap();
    let fields: Value = serde_json::from_str(encoded).unwrap();
    assert_eq!(
        fields,
        json!({"Event Name": "Phishing wave", "Threat Level": "1", "Publish": false})
    );
    let keys: Vec<&String> = fields.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["Event Name", "Threat Level", "Publish"]);
}

#[traced_test]
#[tokio::test]
async fn test_instance_fetch_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::path(instances_path("MISP")))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;
    Mock::given(wiremock::matchers::path(EXECUTE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    let message = failure_message(result);
    assert!(message.starts_with("Error fetching instance: "), "{}", message);
    assert!(message.contains("backend exploded"), "{}", message);
    assert!(logs_contain("Error fetching instance"));
}

#[tokio::test]
async fn test_malformed_instance_listing_is_a_fetch_error() {
    let server = MockServer::start().await;
    mount_instances(&server, "MISP", json!({"integration_instances": "nope"})).await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    assert!(failure_message(result).starts_with("Error fetching instance: "));
}

#[traced_test]
#[tokio::test]
async fn test_dispatch_error_is_reported() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(&server, ResponseTemplate::new(403).set_body_string("forbidden action")).await;

    let result = invoker_for(&server).invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    let message = failure_message(result);
    assert!(message.starts_with("Error executing action: "), "{}", message);
    assert!(message.contains("forbidden action"), "{}", message);
    assert!(logs_contain("Error executing action"));
}

#[tokio::test]
async fn test_unreachable_backend_is_reported() {
    let server = MockServer::start().await;
    let invoker = invoker_for(&server);
    drop(server);

    let result = invoker.invoke(misp_action("misp_ping"), ActionCall::new("42", vec![])).await;

    assert!(failure_message(result).starts_with("Error fetching instance: "));
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let server = MockServer::start().await;
    mount_single_instance(&server, "MISP", "misp-prod").await;
    mount_execute(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"ok": true}))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let invoker = invoker_for(&server);
    let descriptor = misp_action("misp_ping");
    let started = Instant::now();

    let mut calls = JoinSet::new();
    for i in 0..5 {
        let invoker = invoker.clone();
        calls.spawn(async move {
            invoker.invoke(descriptor, ActionCall::new(i.to_string(), vec![])).await
        });
    }

    while let Some(result) = calls.join_next().await {
        assert_eq!(result.unwrap(), ActionResult::Completed(json!({"ok": true})));
    }

    // Five sequential dispatches would take at least 2.5s
    assert!(started.elapsed() < Duration::from_millis(2000), "took {:?}", started.elapsed());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 10);

    let mut case_ids: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path() == EXECUTE_PATH)
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["caseId"].as_str().unwrap().to_string()
        })
        .collect();
    case_ids.sort();
    assert_eq!(case_ids, vec!["0", "1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_target_entity_helper_matches_bound_aliases() {
    let descriptor = misp_action("misp_ping");
    let call = descriptor
        .bind(Some(json!({
            "case_id": "1",
            "alert_group_identifiers": [],
            "target_entities": [
                {"Identifier": "host-a", "EntityType": "HOSTNAME"},
                {"identifier": "host-b", "entity_type": "HOSTNAME"}
            ]
        })))
        .unwrap();

    assert_eq!(
        call.target_entities,
        vec![TargetEntity::new("host-a", "HOSTNAME"), TargetEntity::new("host-b", "HOSTNAME")]
    );
}
