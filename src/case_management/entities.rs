//! Entity lookups: by alert group, by identifier and free search.

use serde_json::{json, Value};
use tracing::instrument;

use super::{
    optional_bool, optional_str, optional_string_list, required_id, required_str,
    required_string_list, respond, CASE_ID_DESCRIPTION,
};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};
use crate::soar::{endpoints, SoarClient};

pub fn get_entities_by_alert_group_identifiers_tool() -> Tool {
    Tool::new(
        "get_entities_by_alert_group_identifiers",
        "Retrieve entities (e.g., IP addresses, hostnames, users) involved in specific alert groups \
         within a case. The result can supply target entities for manual actions.",
        json!({
            "type": "object",
            "properties": {
                "case_id": {"type": "string", "description": CASE_ID_DESCRIPTION},
                "alert_group_identifiers": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Identifiers for the alert groups."
                }
            },
            "required": ["case_id", "alert_group_identifiers"]
        }),
    )
}

pub fn get_entity_details_tool() -> Tool {
    Tool::new(
        "get_entity_details",
        "Fetch detailed information about a specific entity known to the SOAR platform, based on \
         its identifier, type and environment.",
        json!({
            "type": "object",
            "properties": {
                "entity_identifier": {"type": "string", "description": "The identifier of the entity."},
                "entity_type": {"type": "string", "description": "The type of the entity."},
                "entity_environment": {"type": "string", "description": "The environment of the entity."}
            },
            "required": ["entity_identifier", "entity_type", "entity_environment"]
        }),
    )
}

pub fn search_entity_tool() -> Tool {
    let string_list = |description: &str| {
        json!({"type": "array", "items": {"type": "string"}, "description": description, "default": null})
    };
    let flag = |description: &str| json!({"type": "boolean", "description": description, "default": null});

    Tool::new(
        "search_entity",
        "Search for entities within the SOAR platform by term, entity type, suspicion, internal \
         asset or enrichment status, network or environment.",
        json!({
            "type": "object",
            "properties": {
                "term": {"type": "string", "description": "The term to search for", "default": null},
                "type": string_list("The type of the entity"),
                "is_suspicious": flag("A boolean that states if the entity is suspicious"),
                "is_internal_asset": flag("A boolean that states if the entity is an internal asset"),
                "is_enriched": flag("A boolean that states if the entity is enriched"),
                "network_name": string_list("The network name"),
                "environment_name": string_list("The environment name")
            }
        }),
    )
}

#[instrument(skip(client, args), name = "mcp_execute_get_entities_by_alert_group_identifiers")]
pub async fn execute_get_entities_by_alert_group_identifiers(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let alert_group_identifiers = required_string_list(&args, "alert_group_identifiers")?;

    let body = json!({"caseId": case_id, "alertGroupIdentifiers": alert_group_identifiers});
    let result = client.post_json(endpoints::GET_ALERT_GROUP_IDENTIFIERS_ENTITIES, &body).await;
    Ok(respond("get_entities_by_alert_group_identifiers", result))
}

#[instrument(skip(client, args), name = "mcp_execute_get_entity_details")]
pub async fn execute_get_entity_details(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let body = json!({
        "EntityIdentifier": required_str(&args, "entity_identifier")?,
        "EntityType": required_str(&args, "entity_type")?,
        "EntityEnvironment": required_str(&args, "entity_environment")?,
        "LastCaseType": 0,
        "CaseDistributionType": 0,
    });

    let result = client.post_json(endpoints::FETCH_FULL_UNIQUE_ENTITY, &body).await;
    Ok(respond("get_entity_details", result))
}

/// Unset filters are sent as `null`
#[instrument(skip(client, args), name = "mcp_execute_search_entity")]
pub async fn execute_search_entity(client: &SoarClient, args: Value) -> Result<ToolCallResult, McpError> {
    let body = json!({
        "Term": optional_str(&args, "term")?,
        "Type": optional_string_list(&args, "type")?,
        "IsSuspicious": optional_bool(&args, "is_suspicious")?,
        "IsInternalAsset": optional_bool(&args, "is_internal_asset")?,
        "IsEnriched": optional_bool(&args, "is_enriched")?,
        "NetworkName": optional_string_list(&args, "network_name")?,
        "EnvironmentName": optional_string_list(&args, "environment_name")?,
    });

    let result = client.post_json(endpoints::SEARCH_ENTITY, &body).await;
    Ok(respond("search_entity", result))
}
