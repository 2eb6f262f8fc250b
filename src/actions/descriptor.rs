//! Declarative description of a marketplace action and its tool surface.
//!
//! Every marketplace tool is an [`ActionDescriptor`]: the integration, the
//! action title and an ordered parameter table. The descriptor renders the MCP
//! tool definition and binds raw tool-call arguments into an [`ActionCall`].

use serde_json::{json, Map, Value};

use super::models::{EmailContent, TargetEntity};
use crate::mcp::error::McpError;
use crate::mcp::protocol::Tool;
use crate::soar::DEFAULT_SCOPE;

/// JSON shape accepted for a script parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON string
    Text,
    /// JSON boolean
    Flag,
    /// Array of backend-defined values
    List,
    /// Any JSON value; the legal set is defined by the backend
    Opaque,
    /// [`EmailContent`] object
    Email,
    /// String or object, e.g. a JSON header map
    TextOrObject,
}

impl ParamKind {
    fn schema(self) -> Value {
        match self {
            ParamKind::Text => json!({"type": "string"}),
            ParamKind::Flag => json!({"type": "boolean"}),
            ParamKind::List => json!({"type": "array", "items": {}}),
            ParamKind::Opaque => json!({}),
            ParamKind::Email => json!({
                "type": "object",
                "properties": {
                    "Content": {"type": "string"},
                    "ContentTemplateName": {"type": ["string", "null"]},
                    "HtmlTemplateName": {"type": ["string", "null"]}
                },
                "required": ["Content"]
            }),
            ParamKind::TextOrObject => json!({"anyOf": [{"type": "string"}, {"type": "object"}]}),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            ParamKind::Text => "a string",
            ParamKind::Flag => "a boolean",
            ParamKind::List => "an array",
            ParamKind::Opaque => "a JSON value",
            ParamKind::Email => "an object with a string Content field",
            ParamKind::TextOrObject => "a string or an object",
        }
    }

    /// Check a supplied value and return what is sent to the backend
    fn coerce(self, value: Value) -> Option<Value> {
        match (self, value) {
            (ParamKind::Text, value @ Value::String(_)) => Some(value),
            (ParamKind::Flag, value @ Value::Bool(_)) => Some(value),
            (ParamKind::Flag, Value::String(raw)) => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            (ParamKind::List, value @ Value::Array(_)) => Some(value),
            (ParamKind::Opaque, value) => Some(value),
            (ParamKind::Email, value) => {
                let email: EmailContent = serde_json::from_value(value).ok()?;
                serde_json::to_value(email).ok()
            }
            (ParamKind::TextOrObject, value @ (Value::String(_) | Value::Object(_))) => Some(value),
            _ => None,
        }
    }
}

/// One script parameter: tool argument name, backend display name and shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub arg: &'static str,
    pub display: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(
        arg: &'static str,
        display: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self { arg, display, kind, required: true, description }
    }

    pub const fn optional(
        arg: &'static str,
        display: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self { arg, display, kind, required: false, description }
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        if let Value::Object(fields) = &mut schema {
            fields.insert("description".to_string(), Value::String(self.description.to_string()));
            if !self.required {
                fields.insert("default".to_string(), Value::Null);
            }
        }
        schema
    }
}

/// A marketplace action exposed as a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub tool_name: &'static str,
    pub integration: &'static str,
    /// Action title as known to the backend, e.g. `Create Event`
    pub action: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

/// Arguments of one tool call, validated against a descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCall {
    pub case_id: String,
    pub alert_group_identifiers: Vec<String>,
    /// Display-name keyed parameters, in descriptor order; unset optionals absent
    pub script_params: Map<String, Value>,
    pub target_entities: Vec<TargetEntity>,
    pub scope: String,
}

impl ActionCall {
    /// Call with the default scope and no script parameters
    pub fn new(case_id: impl Into<String>, alert_group_identifiers: Vec<String>) -> Self {
        Self {
            case_id: case_id.into(),
            alert_group_identifiers,
            script_params: Map::new(),
            target_entities: Vec::new(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    pub fn with_param(mut self, display: impl Into<String>, value: Value) -> Self {
        self.script_params.insert(display.into(), value);
        self
    }

    pub fn with_target_entities(mut self, target_entities: Vec<TargetEntity>) -> Self {
        self.target_entities = target_entities;
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

impl ActionDescriptor {
    /// Composite action name, e.g. `MISP_Create Event`
    pub fn action_name(&self) -> String {
        format!("{}_{}", self.integration, self.action)
    }

    /// MCP tool definition
    pub fn tool(&self) -> Tool {
        let mut properties = Map::new();
        properties.insert(
            "case_id".to_string(),
            json!({"type": "string", "description": "The ID of the case."}),
        );
        properties.insert(
            "alert_group_identifiers".to_string(),
            json!({
                "type": "array",
                "items": {"type": "string"},
                "description": "Identifiers for the alert groups."
            }),
        );

        let mut required = vec![json!("case_id"), json!("alert_group_identifiers")];
        for param in self.params {
            properties.insert(param.arg.to_string(), param.schema());
            if param.required {
                required.push(json!(param.arg));
            }
        }

        properties.insert(
            "target_entities".to_string(),
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Identifier": {"type": "string"},
                        "EntityType": {"type": "string"}
                    },
                    "required": ["Identifier", "EntityType"]
                },
                "default": [],
                "description": "Optional list of specific target entities (Identifier, EntityType) to run the action on."
            }),
        );
        properties.insert(
            "scope".to_string(),
            json!({
                "type": "string",
                "default": DEFAULT_SCOPE,
                "description": "Defines the scope for the action."
            }),
        );

        Tool::new(
            self.tool_name,
            self.description,
            json!({
                "type": "object",
                "properties": properties,
                "required": required
            }),
        )
    }

    /// Validate raw tool arguments. Explicit `null` counts as not supplied.
    pub fn bind(&self, arguments: Option<Value>) -> Result<ActionCall, McpError> {
        let mut args = match arguments {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(args)) => args,
            Some(_) => {
                return Err(McpError::InvalidParams("Tool arguments must be an object".to_string()))
            }
        };

        let case_id = match take(&mut args, "case_id") {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            Some(_) => return Err(wrong_type("case_id", "a string")),
            None => return Err(missing("case_id")),
        };

        let alert_group_identifiers = match take(&mut args, "alert_group_identifiers") {
            Some(value) => serde_json::from_value::<Vec<String>>(value)
                .map_err(|_| wrong_type("alert_group_identifiers", "an array of strings"))?,
            None => return Err(missing("alert_group_identifiers")),
        };

        let mut script_params = Map::new();
        for param in self.params {
            match take(&mut args, param.arg) {
                Some(value) => {
                    let value =
                        param.kind.coerce(value).ok_or_else(|| wrong_type(param.arg, param.kind.expected()))?;
                    script_params.insert(param.display.to_string(), value);
                }
                None if param.required => return Err(missing(param.arg)),
                None => {}
            }
        }

        let target_entities = match take(&mut args, "target_entities") {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                McpError::InvalidParams(format!("Invalid target_entities: {}", e))
            })?,
            None => Vec::new(),
        };

        let scope = match take(&mut args, "scope") {
            Some(Value::String(scope)) => scope,
            Some(_) => return Err(wrong_type("scope", "a string")),
            None => DEFAULT_SCOPE.to_string(),
        };

        Ok(ActionCall { case_id, alert_group_identifiers, script_params, target_entities, scope })
    }
}

fn take(args: &mut Map<String, Value>, key: &str) -> Option<Value> {
    args.remove(key).filter(|value| !value.is_null())
}

fn missing(arg: &str) -> McpError {
    McpError::InvalidParams(format!("Missing required parameter: {}", arg))
}

fn wrong_type(arg: &str, expected: &str) -> McpError {
    McpError::InvalidParams(format!("Parameter '{}' must be {}", arg, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    static PARAMS: &[ParamSpec] = &[
        ParamSpec::required("event_name", "Event Name", ParamKind::Text, "Name of the event."),
        ParamSpec::optional("distribution", "Distribution", ParamKind::Text, "Distribution code."),
        ParamSpec::optional("publish", "Publish", ParamKind::Flag, "Publish the event."),
        ParamSpec::optional("tags", "Tags", ParamKind::List, "Tags to add."),
    ];

    const CREATE_EVENT: ActionDescriptor = ActionDescriptor {
        tool_name: "misp_create_event",
        integration: "MISP",
        action: "Create Event",
        description: "Create a new event in MISP.",
        params: PARAMS,
    };

    #[test]
    fn test_action_name() {
        assert_eq!(CREATE_EVENT.action_name(), "MISP_Create Event");
    }

    #[test]
    fn test_tool_schema() {
        let tool = CREATE_EVENT.tool();
        assert_eq!(tool.name, "misp_create_event");
        assert_eq!(tool.description.as_deref(), Some("Create a new event in MISP."));

        let schema = &tool.input_schema;
        assert_eq!(
            schema["required"],
            json!(["case_id", "alert_group_identifiers", "event_name"])
        );
        assert_eq!(schema["properties"]["publish"]["type"], "boolean");
        assert_eq!(schema["properties"]["publish"]["default"], Value::Null);
        assert!(schema["properties"]["event_name"].get("default").is_none());
        assert_eq!(schema["properties"]["scope"]["default"], "All entities");
        assert_eq!(schema["properties"]["target_entities"]["default"], json!([]));

        let keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "case_id",
                "alert_group_identifiers",
                "event_name",
                "distribution",
                "publish",
                "tags",
                "target_entities",
                "scope"
            ]
        );
    }

    #[test]
    fn test_bind_omits_unset_optionals() {
        let call = CREATE_EVENT
            .bind(Some(json!({
                "case_id": "42",
                "alert_group_identifiers": ["grp-1"],
                "event_name": "Phishing wave",
                "distribution": null,
                "publish": true
            })))
            .unwrap();

        assert_eq!(call.case_id, "42");
        assert_eq!(call.alert_group_identifiers, vec!["grp-1".to_string()]);
        assert_eq!(
            Value::Object(call.script_params),
            json!({"Event Name": "Phishing wave", "Publish": true})
        );
        assert!(call.target_entities.is_empty());
        assert_eq!(call.scope, DEFAULT_SCOPE);
    }

    #[test]
    fn test_bind_keeps_descriptor_order() {
        let call = CREATE_EVENT
            .bind(Some(json!({
                "tags": ["a"],
                "publish": "False",
                "event_name": "x",
                "case_id": 7,
                "alert_group_identifiers": []
            })))
            .unwrap();

        assert_eq!(call.case_id, "7");
        let keys: Vec<&String> = call.script_params.keys().collect();
        assert_eq!(keys, vec!["Event Name", "Publish", "Tags"]);
        assert_eq!(call.script_params["Publish"], json!(false));
    }

    #[test]
    fn test_bind_target_entities_and_scope() {
        let call = CREATE_EVENT
            .bind(Some(json!({
                "case_id": "1",
                "alert_group_identifiers": ["g"],
                "event_name": "x",
                "target_entities": [{"identifier": "1.2.3.4", "type": "IPAddress"}],
                "scope": "Suspicious entities"
            })))
            .unwrap();

        assert_eq!(call.target_entities, vec![TargetEntity::new("1.2.3.4", "IPAddress")]);
        assert_eq!(call.scope, "Suspicious entities");
    }

    #[test]
    fn test_bind_rejects_missing_required() {
        let err = CREATE_EVENT
            .bind(Some(json!({"case_id": "1", "alert_group_identifiers": ["g"]})))
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
        assert!(err.to_string().contains("event_name"));

        let err = CREATE_EVENT.bind(None).unwrap_err();
        assert!(err.to_string().contains("case_id"));
    }

    #[test]
    fn test_bind_rejects_wrong_types() {
        let base = json!({"case_id": "1", "alert_group_identifiers": ["g"], "event_name": "x"});

        for (key, value) in [
            ("event_name", json!(5)),
            ("publish", json!("maybe")),
            ("tags", json!("a,b")),
            ("scope", json!(["All entities"])),
            ("target_entities", json!([{"identifier": "x"}])),
            ("alert_group_identifiers", json!("g")),
        ] {
            let mut args = base.clone();
            args[key] = value;
            let err = CREATE_EVENT.bind(Some(args)).unwrap_err();
            assert!(matches!(err, McpError::InvalidParams(_)), "{} should be rejected", key);
        }

        assert!(CREATE_EVENT.bind(Some(json!(["not", "an", "object"]))).is_err());
    }

    #[test]
    fn test_email_param_is_normalized() {
        static MAIL: &[ParamSpec] =
            &[ParamSpec::required("mail_content", "Mail content", ParamKind::Email, "Body.")];
        let send = ActionDescriptor {
            tool_name: "exchange_send_email",
            integration: "Exchange",
            action: "Send Email",
            description: "",
            params: MAIL,
        };

        let call = send
            .bind(Some(json!({
                "case_id": "1",
                "alert_group_identifiers": [],
                "mail_content": {"Content": "hello"}
            })))
            .unwrap();
        assert_eq!(
            call.script_params["Mail content"],
            json!({"Content": "hello", "ContentTemplateName": null, "HtmlTemplateName": null})
        );

        let err = send
            .bind(Some(json!({"case_id": "1", "alert_group_identifiers": [], "mail_content": "hello"})))
            .unwrap_err();
        assert!(err.to_string().contains("mail_content"));
    }
}
