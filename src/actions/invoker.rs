//! Turns one bound action call into a single manual-action execution.
//!
//! The flow is linear: resolve the target, resolve the integration instance,
//! build the envelope, dispatch. Every failure ends the call with an
//! [`ActionResult::Failed`]; nothing escapes as an error.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::descriptor::{ActionCall, ActionDescriptor};
use super::models::{
    ActionProperties, ActionRequest, IntegrationInstanceList, TargetEntity, ACTION_PROVIDER,
};
use super::result::ActionResult;
use crate::soar::{endpoints, ScopeAllowList, SoarClient};

const NO_ACTIVE_INSTANCE: &str = "No active instance found.";
const MISSING_IDENTIFIER: &str = "Instance found but identifier is missing.";

/// Resolved target selection of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub target_entities: Vec<TargetEntity>,
    pub scope: Option<String>,
    pub is_predefined_scope: bool,
}

impl TargetSelection {
    /// Explicit entities win over the scope; otherwise the scope must be allowed.
    pub fn resolve(
        target_entities: Vec<TargetEntity>,
        scope: String,
        allowed: &ScopeAllowList,
    ) -> Result<Self, ActionResult> {
        if !target_entities.is_empty() {
            return Ok(Self { target_entities, scope: None, is_predefined_scope: false });
        }

        if !allowed.contains(&scope) {
            return Err(ActionResult::failed(allowed.rejection_message(&scope)));
        }

        Ok(Self { target_entities: Vec::new(), scope: Some(scope), is_predefined_scope: true })
    }
}

impl ActionRequest {
    /// Build the execution envelope for a resolved call
    pub fn build(
        descriptor: &ActionDescriptor,
        call: ActionCall,
        target: TargetSelection,
        instance_identifier: String,
    ) -> serde_json::Result<Self> {
        let action_name = descriptor.action_name();
        let script_parameters_entity_fields =
            serde_json::to_string(&Value::Object(call.script_params))?;

        Ok(Self {
            case_id: call.case_id,
            target_entities: target.target_entities,
            properties: ActionProperties {
                integration_instance: instance_identifier,
                script_name: action_name.clone(),
                script_parameters_entity_fields,
            },
            action_provider: ACTION_PROVIDER.to_string(),
            action_name,
            scope: target.scope,
            alert_group_identifiers: call.alert_group_identifiers,
            is_predefined_scope: target.is_predefined_scope,
        })
    }
}

/// Executes marketplace actions against the SOAR backend
#[derive(Debug, Clone)]
pub struct ActionInvoker {
    client: Arc<SoarClient>,
    scopes: Arc<ScopeAllowList>,
}

impl ActionInvoker {
    pub fn new(client: Arc<SoarClient>, scopes: ScopeAllowList) -> Self {
        Self { client, scopes: Arc::new(scopes) }
    }

    pub fn client(&self) -> &Arc<SoarClient> {
        &self.client
    }

    pub fn scopes(&self) -> &ScopeAllowList {
        &self.scopes
    }

    /// Run one action: at most one GET followed by one POST
    #[instrument(
        skip(self, descriptor, call),
        fields(integration = %descriptor.integration, action = %descriptor.action, case_id = %call.case_id)
    )]
    pub async fn invoke(&self, descriptor: &ActionDescriptor, call: ActionCall) -> ActionResult {
        let mut call = call;
        let entities = std::mem::take(&mut call.target_entities);
        let target = match TargetSelection::resolve(entities, call.scope.clone(), &self.scopes) {
            Ok(target) => target,
            Err(failure) => {
                warn!(scope = %call.scope, "Rejected scope outside the allow-list");
                return failure;
            }
        };

        let instance_identifier = match self.resolve_instance(descriptor.integration).await {
            Ok(identifier) => identifier,
            Err(failure) => return failure,
        };

        let request = match ActionRequest::build(descriptor, call, target, instance_identifier) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Failed to encode script parameters");
                return ActionResult::failed(format!("Error executing action: {}", e));
            }
        };

        debug!(
            action_name = %request.action_name,
            predefined_scope = request.is_predefined_scope,
            "Dispatching manual action"
        );

        match self.client.post_json(endpoints::EXECUTE_MANUAL_ACTION, &request).await {
            Ok(response) => {
                info!(action_name = %request.action_name, "Manual action dispatched");
                ActionResult::Completed(response)
            }
            Err(e) => {
                error!(action_name = %request.action_name, error = %e, "Error executing action");
                ActionResult::failed(format!("Error executing action: {}", e))
            }
        }
    }

    /// Identifier of the first configured instance of `integration`
    async fn resolve_instance(&self, integration: &str) -> Result<String, ActionResult> {
        let fetch_failed = |e: &dyn std::fmt::Display| {
            error!(integration = %integration, error = %e, "Error fetching instance");
            ActionResult::failed(format!("Error fetching instance: {}", e))
        };

        let response = self
            .client
            .get_json(&endpoints::integration_instances(integration), &[])
            .await
            .map_err(|e| fetch_failed(&e))?;

        let listing: IntegrationInstanceList =
            serde_json::from_value(response).map_err(|e| fetch_failed(&e))?;

        let Some(instance) = listing.integration_instances.first() else {
            warn!(integration = %integration, "No active integration instance found");
            return Err(ActionResult::failed(NO_ACTIVE_INSTANCE));
        };

        instance.identifier().ok_or_else(|| {
            warn!(integration = %integration, "Integration instance has no identifier");
            ActionResult::failed(MISSING_IDENTIFIER)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::descriptor::{ParamKind, ParamSpec};
    use serde_json::json;

    static PARAMS: &[ParamSpec] =
        &[ParamSpec::required("event_name", "Event Name", ParamKind::Text, "")];

    const CREATE_EVENT: ActionDescriptor = ActionDescriptor {
        tool_name: "misp_create_event",
        integration: "MISP",
        action: "Create Event",
        description: "",
        params: PARAMS,
    };

    fn allowed() -> ScopeAllowList {
        ScopeAllowList::new(["All entities", "Suspicious entities"])
    }

    #[test]
    fn test_explicit_entities_ignore_scope() {
        let entities = vec![TargetEntity::new("1.2.3.4", "IPAddress")];
        let target =
            TargetSelection::resolve(entities.clone(), "Not A Scope".to_string(), &allowed()).unwrap();

        assert_eq!(target.target_entities, entities);
        assert_eq!(target.scope, None);
        assert!(!target.is_predefined_scope);
    }

    #[test]
    fn test_valid_scope_is_predefined() {
        let target =
            TargetSelection::resolve(Vec::new(), "Suspicious entities".to_string(), &allowed()).unwrap();

        assert!(target.target_entities.is_empty());
        assert_eq!(target.scope.as_deref(), Some("Suspicious entities"));
        assert!(target.is_predefined_scope);
    }

    #[test]
    fn test_invalid_scope_lists_allowed_values() {
        let failure =
            TargetSelection::resolve(Vec::new(), "Not A Scope".to_string(), &allowed()).unwrap_err();
        assert_eq!(
            failure,
            ActionResult::failed(
                "Invalid scope 'Not A Scope'. Allowed values are: All entities, Suspicious entities"
            )
        );
    }

    #[test]
    fn test_build_request_envelope() {
        let call = ActionCall::new("42", vec!["grp".to_string()])
            .with_param("Event Name", json!("Phish"));
        let target = TargetSelection::resolve(Vec::new(), call.scope.clone(), &allowed()).unwrap();

        let request = ActionRequest::build(&CREATE_EVENT, call, target, "inst-1".to_string()).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["caseId"], "42");
        assert_eq!(body["actionProvider"], "Scripts");
        assert_eq!(body["actionName"], "MISP_Create Event");
        assert_eq!(body["scope"], "All entities");
        assert_eq!(body["isPredefinedScope"], true);
        assert_eq!(body["targetEntities"], json!([]));
        assert_eq!(body["alertGroupIdentifiers"], json!(["grp"]));
        assert_eq!(body["properties"]["IntegrationInstance"], "inst-1");
        assert_eq!(body["properties"]["ScriptName"], "MISP_Create Event");

        let fields: Value =
            serde_json::from_str(body["properties"]["ScriptParametersEntityFields"].as_str().unwrap())
                .unwrap();
        assert_eq!(fields, json!({"Event Name": "Phish"}));
    }

    #[test]
    fn test_scope_serializes_as_null_for_entities() {
        let call = ActionCall::new("1", Vec::new())
            .with_target_entities(vec![TargetEntity::new("host", "HOSTNAME")]);
        let target =
            TargetSelection::resolve(call.target_entities.clone(), call.scope.clone(), &allowed())
                .unwrap();

        let request = ActionRequest::build(&CREATE_EVENT, call, target, "i".to_string()).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.as_object().unwrap().contains_key("scope"));
        assert_eq!(body["scope"], Value::Null);
        assert_eq!(body["isPredefinedScope"], false);
        assert_eq!(body["targetEntities"], json!([{"Identifier": "host", "EntityType": "HOSTNAME"}]));
    }
}
