//! Wire types exchanged with the SOAR manual-action API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Execution provider for every marketplace script action
pub const ACTION_PROVIDER: &str = "Scripts";

/// An explicit entity an action should run against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntity {
    #[serde(rename = "Identifier", alias = "identifier")]
    pub identifier: String,
    #[serde(rename = "EntityType", alias = "type", alias = "entityType", alias = "entity_type")]
    pub entity_type: String,
}

impl TargetEntity {
    pub fn new(identifier: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), entity_type: entity_type.into() }
    }
}

/// Script-specific properties of an [`ActionRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionProperties {
    #[serde(rename = "IntegrationInstance")]
    pub integration_instance: String,
    #[serde(rename = "ScriptName")]
    pub script_name: String,
    /// JSON-encoded object of display-name keyed script parameters
    #[serde(rename = "ScriptParametersEntityFields")]
    pub script_parameters_entity_fields: String,
}

/// Body of `POST ExecuteManualAction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub case_id: String,
    pub target_entities: Vec<TargetEntity>,
    pub properties: ActionProperties,
    pub action_provider: String,
    pub action_name: String,
    /// Always serialized; `null` when explicit entities are targeted
    pub scope: Option<String>,
    pub alert_group_identifiers: Vec<String>,
    pub is_predefined_scope: bool,
}

/// Response of the integration-instance listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationInstanceList {
    #[serde(default)]
    pub integration_instances: Vec<IntegrationInstance>,
}

/// A configured connection of an integration. Only the identifier is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationInstance {
    #[serde(default)]
    pub identifier: Option<Value>,
}

impl IntegrationInstance {
    /// Usable identifier: a non-empty string or a number
    pub fn identifier(&self) -> Option<String> {
        match self.identifier.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Mail body accepted by mail-sending actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailContent {
    pub content: String,
    #[serde(default)]
    pub content_template_name: Option<String>,
    #[serde(default)]
    pub html_template_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_entity_accepts_aliases() {
        for input in [
            json!({"identifier": "1.2.3.4", "type": "IPAddress"}),
            json!({"Identifier": "1.2.3.4", "EntityType": "IPAddress"}),
            json!({"identifier": "1.2.3.4", "entityType": "IPAddress"}),
            json!({"identifier": "1.2.3.4", "entity_type": "IPAddress"}),
        ] {
            let entity: TargetEntity = serde_json::from_value(input).unwrap();
            assert_eq!(entity, TargetEntity::new("1.2.3.4", "IPAddress"));
        }

        let encoded = serde_json::to_value(TargetEntity::new("host-1", "HOSTNAME")).unwrap();
        assert_eq!(encoded, json!({"Identifier": "host-1", "EntityType": "HOSTNAME"}));
    }

    #[test]
    fn test_instance_identifier() {
        let listing: IntegrationInstanceList = serde_json::from_value(json!({
            "integration_instances": [
                {"identifier": "abc"},
                {"identifier": ""},
                {"identifier": null},
                {},
                {"identifier": 17}
            ]
        }))
        .unwrap();

        let ids: Vec<Option<String>> =
            listing.integration_instances.iter().map(IntegrationInstance::identifier).collect();
        assert_eq!(ids, vec![Some("abc".into()), None, None, None, Some("17".into())]);
    }

    #[test]
    fn test_instance_listing_defaults_to_empty() {
        let listing: IntegrationInstanceList = serde_json::from_value(json!({})).unwrap();
        assert!(listing.integration_instances.is_empty());
    }

    #[test]
    fn test_email_content_keeps_null_templates() {
        let email: EmailContent = serde_json::from_value(json!({"Content": "hi"})).unwrap();
        assert_eq!(
            serde_json::to_value(email).unwrap(),
            json!({"Content": "hi", "ContentTemplateName": null, "HtmlTemplateName": null})
        );
    }
}
