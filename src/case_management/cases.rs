//! Case listing, comments, priority and the aggregated case view.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

use super::{page_token, required_id, required_str, respond, CASE_ID_DESCRIPTION, PAGE_TOKEN_DESCRIPTION};
use crate::actions::ActionResult;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};
use crate::soar::{endpoints, SoarClient};

/// Case priority levels accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasePriority {
    PriorityUnspecified,
    PriorityInfo,
    PriorityLow,
    PriorityMedium,
    PriorityHigh,
    PriorityCritical,
}

impl CasePriority {
    pub const ALL: [CasePriority; 6] = [
        CasePriority::PriorityUnspecified,
        CasePriority::PriorityInfo,
        CasePriority::PriorityLow,
        CasePriority::PriorityMedium,
        CasePriority::PriorityHigh,
        CasePriority::PriorityCritical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CasePriority::PriorityUnspecified => "PriorityUnspecified",
            CasePriority::PriorityInfo => "PriorityInfo",
            CasePriority::PriorityLow => "PriorityLow",
            CasePriority::PriorityMedium => "PriorityMedium",
            CasePriority::PriorityHigh => "PriorityHigh",
            CasePriority::PriorityCritical => "PriorityCritical",
        }
    }
}

pub fn list_cases_tool() -> Tool {
    Tool::new(
        "list_cases",
        "List cases available in the Security Orchestration, Automation, and Response (SOAR) platform. \
         A case represents a security incident or investigation grouping related alerts and response actions. \
         Case priority is only an initial indicator; use get_case_full_details to assess a case.",
        json!({
            "type": "object",
            "properties": {
                "next_page_token": {
                    "type": "string",
                    "description": PAGE_TOKEN_DESCRIPTION,
                    "default": null
                }
            }
        }),
    )
}

pub fn post_case_comment_tool() -> Tool {
    Tool::new(
        "post_case_comment",
        "Post a comment to a specific case within the SOAR platform. Use it to document findings, \
         actions taken and investigation progress.",
        json!({
            "type": "object",
            "properties": {
                "case_id": {"type": "string", "description": CASE_ID_DESCRIPTION},
                "comment": {"type": "string", "description": "The comment we wish to add to the case."}
            },
            "required": ["case_id", "comment"]
        }),
    )
}

pub fn change_case_priority_tool() -> Tool {
    let priorities: Vec<&str> = CasePriority::ALL.iter().map(CasePriority::as_str).collect();
    Tool::new(
        "change_case_priority",
        "Change the priority level of a specific case in the SOAR platform. Priority reflects the \
         currently available information and may be adjusted as the investigation progresses.",
        json!({
            "type": "object",
            "properties": {
                "case_id": {"type": "string", "description": CASE_ID_DESCRIPTION},
                "case_priority": {
                    "type": "string",
                    "enum": priorities,
                    "description": "The priority of the case."
                }
            },
            "required": ["case_id", "case_priority"]
        }),
    )
}

pub fn get_case_full_details_tool() -> Tool {
    Tool::new(
        "get_case_full_details",
        "Retrieve comprehensive details for a specific case by aggregating its core information, \
         associated alerts, and comments in one call.",
        json!({
            "type": "object",
            "properties": {
                "case_id": {"type": "string", "description": CASE_ID_DESCRIPTION}
            },
            "required": ["case_id"]
        }),
    )
}

#[instrument(skip(client, args), name = "mcp_execute_list_cases")]
pub async fn execute_list_cases(client: &SoarClient, args: Value) -> Result<ToolCallResult, McpError> {
    let result = match page_token(&args)? {
        Some(token) => {
            client.get_json(endpoints::CASES, &[("$expand", "tags"), ("pageToken", token)]).await
        }
        None => client.get_json(endpoints::CASES, &[]).await,
    };
    Ok(respond("list_cases", result))
}

#[instrument(skip(client, args), name = "mcp_execute_post_case_comment")]
pub async fn execute_post_case_comment(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let comment = required_str(&args, "comment")?;

    let result =
        client.post_json(&endpoints::case_comments(&case_id), &json!({"Comment": comment})).await;
    Ok(respond("post_case_comment", result))
}

#[instrument(skip(client, args), name = "mcp_execute_change_case_priority")]
pub async fn execute_change_case_priority(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;
    let priority: CasePriority = args
        .get("case_priority")
        .filter(|value| !value.is_null())
        .ok_or_else(|| McpError::InvalidParams("Missing required parameter: case_priority".to_string()))
        .and_then(|value| {
            serde_json::from_value(value.clone())
                .map_err(|e| McpError::InvalidParams(format!("Invalid case_priority: {}", e)))
        })?;

    let result =
        client.patch_json(&endpoints::case(&case_id), &json!({"Priority": priority.as_str()})).await;
    Ok(respond("change_case_priority", result))
}

/// Case, alerts and comments fetched concurrently
#[instrument(skip(client, args), name = "mcp_execute_get_case_full_details")]
pub async fn execute_get_case_full_details(
    client: &SoarClient,
    args: Value,
) -> Result<ToolCallResult, McpError> {
    let case_id = required_id(&args, "case_id")?;

    let case_path = endpoints::case(&case_id);
    let alerts_path = endpoints::case_alerts(&case_id);
    let comments_path = endpoints::case_comments(&case_id);

    let (details, alerts, comments) = tokio::join!(
        client.get_json(&case_path, &[]),
        client.get_json(&alerts_path, &[]),
        client.get_json(&comments_path, &[]),
    );

    let part = |result: crate::errors::Result<Value>| {
        let result = ActionResult::from(result);
        if let ActionResult::Failed(message) = &result {
            tracing::error!(case_id = %case_id, error = %message, "Case detail request failed");
        }
        result.into_value()
    };

    let aggregated = json!({
        "case_details": part(details),
        "case_alerts": part(alerts),
        "case_comments": part(comments),
    });
    Ok(ActionResult::Completed(aggregated).into_tool_result())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_priority_wire_names() {
        for priority in CasePriority::ALL {
            assert_eq!(serde_json::to_value(priority).unwrap(), json!(priority.as_str()));
        }
        assert!(serde_json::from_value::<CasePriority>(json!("High")).is_err());
    }

    #[test]
    fn test_change_case_priority_schema_lists_all_levels() {
        let tool = change_case_priority_tool();
        let levels = tool.input_schema["properties"]["case_priority"]["enum"].as_array().unwrap();
        assert_eq!(levels.len(), 6);
        assert_eq!(levels[0], "PriorityUnspecified");
    }
}
