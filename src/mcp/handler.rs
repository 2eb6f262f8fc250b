//! MCP Request Handler
//!
//! Routes incoming JSON-RPC requests to the appropriate method handlers.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tracing::{debug, error, info, warn, Instrument};

use crate::actions::ActionInvoker;
use crate::case_management;
use crate::marketplace::IntegrationRegistry;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::tool_span;

/// Highest supported version not newer than the client's; the latest version
/// when the client is older than anything supported.
fn negotiate_version(client_version: &str) -> &'static str {
    SUPPORTED_VERSIONS
        .iter()
        .rev()
        .find(|&&v| v <= client_version)
        .copied()
        .unwrap_or(PROTOCOL_VERSION)
}

/// Request router shared by every in-flight request task
pub struct McpHandler {
    invoker: ActionInvoker,
    registry: IntegrationRegistry,
    initialized: AtomicBool,
}

impl McpHandler {
    pub fn new(invoker: ActionInvoker, registry: IntegrationRegistry) -> Self {
        Self { invoker, registry, initialized: AtomicBool::new(false) }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Handle an incoming JSON-RPC message. Notifications yield `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let method = request.method.clone();
        let id = request.id.clone();
        let is_notification = request.is_notification();

        debug!(method = %method, id = ?id, "Handling MCP request");

        let response = if request.jsonrpc != JSONRPC_VERSION {
            self.error_response(
                id.clone(),
                McpError::InvalidRequest(format!("Unsupported jsonrpc version: {}", request.jsonrpc)),
            )
        } else {
            match request.method.as_str() {
                "initialize" => self.handle_initialize(id.clone(), request.params),
                "notifications/initialized" | "initialized" => {
                    debug!("Client finished initialization");
                    JsonRpcResponse::success(id.clone(), serde_json::json!({}))
                }
                "notifications/cancelled" => {
                    debug!("Received cancellation notification");
                    JsonRpcResponse::success(id.clone(), serde_json::json!({}))
                }
                "ping" => JsonRpcResponse::success(id.clone(), serde_json::json!({})),
                "tools/list" => self.handle_tools_list(id.clone()),
                "tools/call" => self.handle_tools_call(id.clone(), request.params).await,
                _ => self.error_response(id.clone(), McpError::MethodNotFound(method.clone())),
            }
        };

        debug!(
            method = %method,
            id = ?id,
            has_error = response.error.is_some(),
            "Completed MCP request"
        );

        if is_notification {
            None
        } else {
            Some(response)
        }
    }

    fn handle_initialize(&self, id: Option<JsonRpcId>, params: Value) -> JsonRpcResponse {
        let params: InitializeRequest = if params.is_null() {
            InitializeRequest::default()
        } else {
            match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    error!(error = %e, "Failed to parse initialize params");
                    return self.error_response(
                        id,
                        McpError::InvalidParams(format!("Failed to parse initialize params: {}", e)),
                    );
                }
            }
        };

        let client_version = if params.protocol_version.is_empty() {
            SUPPORTED_VERSIONS[0]
        } else {
            params.protocol_version.as_str()
        };
        let negotiated_version = negotiate_version(client_version);

        info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()).unwrap_or("unknown"),
            client_version = %client_version,
            negotiated_version = %negotiated_version,
            "MCP session initialized"
        );

        self.initialized.store(true, Ordering::Release);

        let result = InitializeResult {
            protocol_version: negotiated_version.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: Some(false) }),
            },
            server_info: ServerInfo {
                name: crate::SERVER_NAME.to_string(),
                version: crate::VERSION.to_string(),
            },
            instructions: None,
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => self.error_response(id, McpError::SerializationError(e)),
        }
    }

    /// Case management tools followed by the enabled marketplace actions
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = case_management::tools();
        tools.extend(self.registry.tools());
        tools
    }

    fn handle_tools_list(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: self.tools(), next_cursor: None };
        debug!(count = result.tools.len(), "Listing available tools");

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => self.error_response(id, McpError::SerializationError(e)),
        }
    }

    async fn handle_tools_call(&self, id: Option<JsonRpcId>, params: Value) -> JsonRpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "Failed to parse tool call params");
                return self.error_response(
                    id,
                    McpError::InvalidParams(format!("Failed to parse tool call params: {}", e)),
                );
            }
        };

        let span = tool_span!(params.name);
        let result = self.execute_tool(params.name.as_str(), params.arguments).instrument(span).await;

        match result.and_then(|r| serde_json::to_value(r).map_err(McpError::from)) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                warn!(tool_name = %params.name, error = %e, "Tool call rejected");
                self.error_response(id, e)
            }
        }
    }

    async fn execute_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolCallResult, McpError> {
        let client = self.invoker.client().as_ref();
        let args = arguments.unwrap_or_else(|| serde_json::json!({}));

        match name {
            "list_cases" => case_management::execute_list_cases(client, args).await,
            "post_case_comment" => case_management::execute_post_case_comment(client, args).await,
            "list_alerts_by_case" => {
                case_management::execute_list_alerts_by_case(client, args).await
            }
            "list_alert_group_identifiers_by_case" => {
                case_management::execute_list_alert_group_identifiers_by_case(client, args).await
            }
            "list_events_by_alert" => {
                case_management::execute_list_events_by_alert(client, args).await
            }
            "change_case_priority" => {
                case_management::execute_change_case_priority(client, args).await
            }
            "get_entities_by_alert_group_identifiers" => {
                case_management::execute_get_entities_by_alert_group_identifiers(client, args).await
            }
            "get_entity_details" => case_management::execute_get_entity_details(client, args).await,
            "search_entity" => case_management::execute_search_entity(client, args).await,
            "get_case_full_details" => {
                case_management::execute_get_case_full_details(client, args).await
            }
            _ => {
                let descriptor = self
                    .registry
                    .find(name)
                    .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
                let call = descriptor.bind(Some(args))?;
                Ok(self.invoker.invoke(descriptor, call).await.into_tool_result())
            }
        }
    }

    fn error_response(&self, id: Option<JsonRpcId>, error: McpError) -> JsonRpcResponse {
        JsonRpcResponse::failure(id, error.to_json_rpc_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SoarConfig;
    use crate::soar::{ScopeAllowList, SoarClient};
    use serde_json::json;
    use std::sync::Arc;

    fn handler(integrations: &[&str]) -> McpHandler {
        let client = SoarClient::new(&SoarConfig::new("http://127.0.0.1:9")).unwrap();
        let invoker = ActionInvoker::new(Arc::new(client), ScopeAllowList::new(["All entities"]));
        McpHandler::new(invoker, IntegrationRegistry::from_names(integrations))
    }

    fn request(id: Option<i64>, method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: id.map(JsonRpcId::Number),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_negotiate_version() {
        assert_eq!(negotiate_version("2025-06-18"), "2025-06-18");
        assert_eq!(negotiate_version("2025-04-01"), "2025-03-26");
        assert_eq!(negotiate_version("2099-01-01"), PROTOCOL_VERSION);
        assert_eq!(negotiate_version("2023-01-01"), PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_initialize() {
        let handler = handler(&[]);
        let response = handler
            .handle_request(request(
                Some(1),
                "initialize",
                json!({"protocolVersion": "2024-11-05", "capabilities": {}, "clientInfo": {"name": "t", "version": "1"}}),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], crate::SERVER_NAME);
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert!(handler.is_initialized());
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let handler = handler(&[]);
        let response =
            handler.handle_request(request(None, "notifications/initialized", Value::Null)).await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let handler = handler(&[]);
        let response =
            handler.handle_request(request(Some(2), "resources/list", Value::Null)).await.unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tools_list_depends_on_registry() {
        let bare = handler(&[]);
        let response = bare.handle_request(request(Some(3), "tools/list", Value::Null)).await.unwrap();
        let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
        assert_eq!(tools, 10);

        let with_misp = handler(&["MISP"]);
        let response =
            with_misp.handle_request(request(Some(4), "tools/list", Value::Null)).await.unwrap();
        let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
        assert_eq!(tools, 10 + 26);
    }

    #[tokio::test]
    async fn test_disabled_integration_tool_is_not_found() {
        let handler = handler(&[]);
        let response = handler
            .handle_request(request(
                Some(5),
                "tools/call",
                json!({"name": "misp_ping", "arguments": {"case_id": "1", "alert_group_identifiers": []}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_invalid_params() {
        let handler = handler(&["MISP"]);
        let response = handler
            .handle_request(request(
                Some(6),
                "tools/call",
                json!({"name": "misp_create_event", "arguments": {"case_id": "1"}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let handler = handler(&[]);
        let mut ping = request(Some(7), "ping", Value::Null);
        ping.jsonrpc = "1.0".to_string();
        let response = handler.handle_request(ping).await.unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_REQUEST);
    }
}
