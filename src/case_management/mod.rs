//! # Case Management Tools
//!
//! Tools that talk to the SOAR case API directly: cases, comments, alerts,
//! events and entities. They are always registered, independent of the
//! enabled marketplace integrations. Backend failures come back as the same
//! `{Status: "Failed", Message}` object marketplace actions use.

pub mod alerts;
pub mod cases;
pub mod entities;

pub use alerts::*;
pub use cases::*;
pub use entities::*;

use serde_json::Value;
use tracing::error;

use crate::actions::ActionResult;
use crate::errors::Result;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{Tool, ToolCallResult};

/// Tool definitions of every case management tool
pub fn tools() -> Vec<Tool> {
    vec![
        list_cases_tool(),
        post_case_comment_tool(),
        list_alerts_by_case_tool(),
        list_alert_group_identifiers_by_case_tool(),
        list_events_by_alert_tool(),
        change_case_priority_tool(),
        get_entities_by_alert_group_identifiers_tool(),
        get_entity_details_tool(),
        search_entity_tool(),
        get_case_full_details_tool(),
    ]
}

pub(crate) const CASE_ID_DESCRIPTION: &str = "The ID of the case.";
pub(crate) const PAGE_TOKEN_DESCRIPTION: &str =
    "The nextPageToken to fetch the next page of results.";

/// Wrap a backend result as tool output, logging failures
pub(crate) fn respond(tool: &str, result: Result<Value>) -> ToolCallResult {
    if let Err(e) = &result {
        error!(tool = %tool, error = %e, "SOAR request failed");
    }
    ActionResult::from(result).into_tool_result()
}

/// Value of `key`, treating explicit null as absent
fn field<'a>(args: &'a Value, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|value| !value.is_null())
}

/// Required identifier; numeric ids are accepted and rendered as strings
pub(crate) fn required_id(args: &Value, key: &str) -> std::result::Result<String, McpError> {
    match field(args, key) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(_) => Err(McpError::InvalidParams(format!("Parameter '{}' must be a string", key))),
        None => Err(McpError::InvalidParams(format!("Missing required parameter: {}", key))),
    }
}

pub(crate) fn required_str<'a>(args: &'a Value, key: &str) -> std::result::Result<&'a str, McpError> {
    optional_str(args, key)?
        .ok_or_else(|| McpError::InvalidParams(format!("Missing required parameter: {}", key)))
}

pub(crate) fn optional_str<'a>(
    args: &'a Value,
    key: &str,
) -> std::result::Result<Option<&'a str>, McpError> {
    match field(args, key) {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(McpError::InvalidParams(format!("Parameter '{}' must be a string", key))),
        None => Ok(None),
    }
}

pub(crate) fn optional_bool(args: &Value, key: &str) -> std::result::Result<Option<bool>, McpError> {
    match field(args, key) {
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(McpError::InvalidParams(format!("Parameter '{}' must be a boolean", key))),
        None => Ok(None),
    }
}

pub(crate) fn optional_string_list(
    args: &Value,
    key: &str,
) -> std::result::Result<Option<Vec<String>>, McpError> {
    field(args, key)
        .map(|value| {
            serde_json::from_value(value.clone()).map_err(|_| {
                McpError::InvalidParams(format!("Parameter '{}' must be an array of strings", key))
            })
        })
        .transpose()
}

pub(crate) fn required_string_list(
    args: &Value,
    key: &str,
) -> std::result::Result<Vec<String>, McpError> {
    optional_string_list(args, key)?
        .ok_or_else(|| McpError::InvalidParams(format!("Missing required parameter: {}", key)))
}

/// Page token, ignoring empty strings
pub(crate) fn page_token<'a>(args: &'a Value) -> std::result::Result<Option<&'a str>, McpError> {
    Ok(optional_str(args, "next_page_token")?.filter(|token| !token.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_names_are_unique() {
        let tools = tools();
        assert_eq!(tools.len(), 10);
        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_argument_helpers() {
        let args = json!({
            "case_id": 12,
            "comment": "hi",
            "flag": true,
            "list": ["a", "b"],
            "empty": null,
            "next_page_token": ""
        });

        assert_eq!(required_id(&args, "case_id").unwrap(), "12");
        assert_eq!(required_str(&args, "comment").unwrap(), "hi");
        assert!(required_str(&args, "empty").is_err());
        assert!(required_str(&args, "flag").is_err());
        assert_eq!(optional_bool(&args, "flag").unwrap(), Some(true));
        assert_eq!(optional_bool(&args, "missing").unwrap(), None);
        assert_eq!(
            optional_string_list(&args, "list").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(required_string_list(&args, "comment").is_err());
        assert_eq!(page_token(&args).unwrap(), None);
    }
}
