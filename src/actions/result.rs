//! Uniform outcome of a tool call.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::mcp::protocol::{ContentBlock, ToolCallResult};

/// Either the backend's raw response or a `{Status: "Failed", Message}` object
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Completed(Value),
    Failed(String),
}

impl ActionResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Completed(value) => value,
            Self::Failed(message) => json!({"Status": "Failed", "Message": message}),
        }
    }

    /// Single text block holding the JSON result
    pub fn into_tool_result(self) -> ToolCallResult {
        let value = self.into_value();
        let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        ToolCallResult { content: vec![ContentBlock::Text { text }], is_error: None }
    }
}

impl From<crate::errors::Result<Value>> for ActionResult {
    fn from(result: crate::errors::Result<Value>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl Serialize for ActionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Completed(value) => value.serialize(serializer),
            Self::Failed(message) => {
                json!({"Status": "Failed", "Message": message}).serialize(serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_shape_has_exactly_two_keys() {
        let value = ActionResult::failed("No active instance found.").into_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["Status"], "Failed");
        assert_eq!(object["Message"], "No active instance found.");
    }

    #[test]
    fn test_completed_is_passed_through() {
        let raw = json!({"id": 5, "status": "InProgress"});
        assert_eq!(ActionResult::Completed(raw.clone()).into_value(), raw);
        assert_eq!(serde_json::to_value(ActionResult::Completed(raw.clone())).unwrap(), raw);
    }

    #[test]
    fn test_into_tool_result_is_text_json() {
        let result = ActionResult::failed("boom").into_tool_result();
        assert_eq!(result.content.len(), 1);
        let text = match &result.content[0] {
            ContentBlock::Text { text } => text,
        };
        let decoded: Value = serde_json::from_str(text).unwrap();
        assert_eq!(decoded, json!({"Status": "Failed", "Message": "boom"}));
        assert!(result.is_error.is_none());
    }
}
