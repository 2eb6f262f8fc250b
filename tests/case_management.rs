//! Integration tests for the case management tools against a mocked SOAR backend.

mod common;

use common::*;
use serde_json::{json, Value};
use soar_mcp::case_management::*;
use soar_mcp::mcp::{ContentBlock, McpError, ToolCallResult};
use tracing_test::traced_test;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn output(result: ToolCallResult) -> Value {
    assert!(result.is_error.is_none());
    match result.content.as_slice() {
        [ContentBlock::Text { text }] => serde_json::from_str(text).expect("tool output is JSON"),
        other => panic!("expected a single text block, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_cases_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cases": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let result = execute_list_cases(&client_for(&server), json!({})).await.unwrap();
    assert_eq!(output(result), json!({"cases": [{"id": 1}]}));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_list_cases_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases"))
        .and(query_param("$expand", "tags"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cases": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result =
        execute_list_cases(&client_for(&server), json!({"next_page_token": "tok-2"})).await.unwrap();
    assert_eq!(output(result), json!({"cases": []}));
}

#[tokio::test]
async fn test_post_case_comment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/1p/external/v1/cases/42/comments"))
        .and(body_json(json!({"Comment": "Contained host"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let result = execute_post_case_comment(
        &client_for(&server),
        json!({"case_id": "42", "comment": "Contained host"}),
    )
    .await
    .unwrap();
    assert_eq!(output(result), json!({"id": 7}));
}

#[tokio::test]
async fn test_change_case_priority() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/1p/external/v1/cases/42"))
        .and(body_json(json!({"Priority": "PriorityHigh"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = execute_change_case_priority(
        &client_for(&server),
        json!({"case_id": 42, "case_priority": "PriorityHigh"}),
    )
    .await
    .unwrap();
    assert_eq!(output(result), Value::Null);
}

#[tokio::test]
async fn test_change_case_priority_rejects_unknown_level() {
    let server = MockServer::start().await;
    let err = execute_change_case_priority(
        &client_for(&server),
        json!({"case_id": "42", "case_priority": "Urgent"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, McpError::InvalidParams(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_alert_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1.0/cases/42/caseAlerts"))
        .and(query_param("$select", "alertGroupIdentifier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"caseAlerts": ["grp"]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1.0/cases/42/alerts/a-1/involvedEvents"))
        .and(query_param("pageToken", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let groups = execute_list_alert_group_identifiers_by_case(&client, json!({"case_id": "42"}))
        .await
        .unwrap();
    assert_eq!(output(groups), json!({"caseAlerts": ["grp"]}));

    let events = execute_list_events_by_alert(
        &client,
        json!({"case_id": "42", "alert_id": "a-1", "next_page_token": "p2"}),
    )
    .await
    .unwrap();
    assert_eq!(output(events), json!({"events": []}));
}

#[tokio::test]
async fn test_list_events_requires_alert_id() {
    let server = MockServer::start().await;
    let err = execute_list_events_by_alert(&client_for(&server), json!({"case_id": "42"}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("alert_id"));
}

#[tokio::test]
async fn test_entity_tools_send_backend_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/external/v1/case-overview/GetAlertsEntities"))
        .and(body_json(json!({"caseId": "42", "alertGroupIdentifiers": ["g1", "g2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"entity": "x"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/external/v1/entities/GetEntityData"))
        .and(body_json(json!({
            "EntityIdentifier": "10.0.0.1",
            "EntityType": "ADDRESS",
            "EntityEnvironment": "Default Environment",
            "LastCaseType": 0,
            "CaseDistributionType": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entity": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entities = execute_get_entities_by_alert_group_identifiers(
        &client,
        json!({"case_id": "42", "alert_group_identifiers": ["g1", "g2"]}),
    )
    .await
    .unwrap();
    assert_eq!(output(entities), json!([{"entity": "x"}]));

    let details = execute_get_entity_details(
        &client,
        json!({
            "entity_identifier": "10.0.0.1",
            "entity_type": "ADDRESS",
            "entity_environment": "Default Environment"
        }),
    )
    .await
    .unwrap();
    assert_eq!(output(details), json!({"entity": {}}));
}

#[tokio::test]
async fn test_search_entity_sends_nulls_for_unset_filters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/external/v1.0/entity-search/entities"))
        .and(body_json(json!({
            "Term": "evil.example",
            "Type": null,
            "IsSuspicious": true,
            "IsInternalAsset": null,
            "IsEnriched": null,
            "NetworkName": null,
            "EnvironmentName": ["Default Environment"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entities": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = execute_search_entity(
        &client_for(&server),
        json!({
            "term": "evil.example",
            "is_suspicious": true,
            "environment_name": ["Default Environment"]
        }),
    )
    .await
    .unwrap();
    assert_eq!(output(result), json!({"entities": []}));
}

#[tokio::test]
async fn test_get_case_full_details_aggregates_parts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1.0/cases/42/caseAlerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"caseAlerts": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases/42/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"comments": []})))
        .mount(&server)
        .await;

    let result =
        execute_get_case_full_details(&client_for(&server), json!({"case_id": "42"})).await.unwrap();

    assert_eq!(
        output(result),
        json!({
            "case_details": {"id": 42},
            "case_alerts": {"caseAlerts": []},
            "case_comments": {"comments": []}
        })
    );
}

#[traced_test]
#[tokio::test]
async fn test_get_case_full_details_reports_partial_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1.0/cases/42/caseAlerts"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no alerts"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases/42/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result =
        execute_get_case_full_details(&client_for(&server), json!({"case_id": "42"})).await.unwrap();
    let value = output(result);

    assert_eq!(value["case_details"], json!({"id": 42}));
    assert_eq!(value["case_comments"], json!([]));
    assert_eq!(value["case_alerts"]["Status"], "Failed");
    assert!(value["case_alerts"]["Message"].as_str().unwrap().contains("no alerts"));
    assert!(logs_contain("Case detail request failed"));
}

#[tokio::test]
async fn test_backend_failure_is_a_failed_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1.0/cases/9/caseAlerts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = execute_list_alerts_by_case(&client_for(&server), json!({"case_id": "9"}))
        .await
        .unwrap();
    let value = output(result);

    assert_eq!(value.as_object().unwrap().len(), 2);
    assert_eq!(value["Status"], "Failed");
    assert!(value["Message"].as_str().unwrap().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_requests_carry_app_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1p/external/v1/cases"))
        .and(wiremock::matchers::header("AppKey", APP_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    execute_list_cases(&client_for(&server), json!({"next_page_token": ""})).await.unwrap();
}
