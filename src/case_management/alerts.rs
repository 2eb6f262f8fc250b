//! Alerts, alert groups and involved events of a case.

use serde_json::{json, Value};
use tracing::instrument;

use super::{page_token, required_id, respond, CASE_ID_DESCRIPTION, PAGE_TOKEN_DESCRIPTION};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};
use crate::soar::{endpoints, SoarClient};

fn paged_case_schema(extra: Option<(&str, &str)>) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "case_id": {"type": "string", "description": CASE_ID_DESCRIPTION},
            "next_page_token": {
                "type": "string",
                "description": PAGE_TOKEN_DESCRIPTION,
                "default": null
            }
        },
        "required": ["case_id"]
    });

    if let Some((name, description)) = extra {
        schema["properties"][name] = json!({"type": "string", "description": description});
        if let Some(required) = schema["required"].as_array_mut() {
            required.push(json!(name));
        }
    }
    schema
}

pub fn list_alerts_by_case_tool() -> Tool {
    Tool::new(
        "list_alerts_by_case",
        "List the security alerts associated with a specific case ID in the SOAR platform. \
         Alerts show the scope of the incident and the evidence collected.",
        paged_case_schema(None),
    )
}

pub fn list_alert_group_identifiers_by_case_tool() -> Tool {
    Tool::new(
        "list_alert_group_identifiers_by_case",
        "List alert group identifiers associated with a specific case ID in the SOAR platform. \
         The identifiers target alert groups for manual actions and entity lookups.",
        paged_case_schema(None),
    )
}

pub fn list_events_by_alert_tool() -> Tool {
    Tool::new(
        "list_events_by_alert",
        "List the underlying security events associated with a specific alert within a given case. \
         Events carry the raw data needed to validate the alert.",
        paged_case_schema(Some(("alert_id", "The ID of the alert."))),
    )
}

async fn get_paged(client: &SoarClient, path: &str, args: &Value) -> Result<crate::errors::Result<Value>, McpError> {
    Ok(match page_token(args)? {
        Some(token) => client.get_json(path, &[("pageToken", token)]).await,
        None => client.get_json(path, &[]).await,
    })
}

#[instrument(skip(client, args), name = "mcp_execute_list_alerts_by_case")]
pub async fn execute_list_alerts_by_case(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let result = get_paged(client, &endpoints::case_alerts(&case_id), &args).await?;
    Ok(respond("list_alerts_by_case", result))
}

#[instrument(skip(client, args), name = "mcp_execute_list_alert_group_identifiers_by_case")]
pub async fn execute_list_alert_group_identifiers_by_case(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let result = get_paged(client, &endpoints::case_alert_group_identifiers(&case_id), &args).await?;
    Ok(respond("list_alert_group_identifiers_by_case", result))
}

#[instrument(skip(client, args), name = "mcp_execute_list_events_by_alert")]
pub async fn execute_list_events_by_alert(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let alert_id = required_id(&args, "alert_id")?;
    let result =
        get_paged(client, &endpoints::alert_involved_events(&case_id, &alert_id), &args).await?;
    Ok(respond("list_events_by_alert", result))
}
