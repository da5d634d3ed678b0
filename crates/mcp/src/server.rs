// MCP server: JSON-RPC routing plus the tool dispatcher.

use crate::args::Arguments;
use crate::error::DispatchError;
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::tools::{ToolRegistry, ToolTier};
use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve and run a tool invocation.
    ///
    /// Validation order: unknown tool, then the tool's own argument
    /// checks; all of it happens before any upstream request. Invocations
    /// of write-capable tools are logged at warn level since the
    /// dispatcher cannot know the semantics of the target endpoint.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: &Arguments,
    ) -> Result<Value, DispatchError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool {
                name: name.to_string(),
            })?;
        if tool.tier() == ToolTier::Write {
            warn!(tool = name, "dispatching write-capable tool");
        } else {
            debug!(tool = name, "dispatching tool");
        }
        tool.execute(arguments).await
    }

    /// Handle one JSON-RPC request. Notifications return `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "ignoring notification");
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                InitializeResult {
                    protocol_version: PROTOCOL_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        tools: ToolsCapability {
                            list_changed: false,
                        },
                    },
                    server_info: ServerInfo {
                        name: env!("CARGO_PKG_NAME").to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                    },
                },
            ),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            _ => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("tools/call requires {name, arguments}"),
                )
            }
        };
        let arguments: Arguments = match params.arguments {
            Value::Object(map) => map,
            Value::Null => Arguments::new(),
            _ => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("arguments must be an object"),
                )
            }
        };

        match self.dispatch(&params.name, &arguments).await {
            Ok(result) => {
                let text = serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|_| result.to_string());
                JsonRpcResponse::success(id, CallToolResult::text(text))
            }
            Err(DispatchError::UnknownTool { name }) => JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("unknown tool: {name}")),
            ),
            Err(err) => {
                warn!(tool = %params.name, error = %err, "tool invocation failed");
                JsonRpcResponse::success(id, CallToolResult::error(err.to_string()))
            }
        }
    }

    /// Serve newline-delimited JSON-RPC over stdin/stdout until EOF.
    pub async fn serve_stdio(&self) -> Result<()> {
        info!("starting MCP stdio transport");

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin).lines();

        while let Some(line) = reader.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle_request(request).await,
                Err(e) => {
                    error!(error = %e, "parse error");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
            };

            if let Some(response) = response {
                let payload = serde_json::to_string(&response)?;
                stdout.write_all(payload.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        info!("stdio transport shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_registry;
    use runn_sdk::{ClientConfig, RunnClient};
    use serde_json::json;

    fn server_for(base_url: &str) -> McpServer {
        let config = ClientConfig::new(url::Url::parse(base_url).unwrap(), "test-key");
        let client = RunnClient::new(config).unwrap();
        McpServer::new(default_registry(client, false))
    }

    // The upstream is never contacted in these tests; a dead address
    // proves validation failures happen before any network call.
    fn offline_server() -> McpServer {
        server_for("http://127.0.0.1:9")
    }

    #[tokio::test]
    async fn unknown_tool_fails_without_network() {
        let server = offline_server();
        let err = server
            .dispatch("list_invoices", &crate::args::Arguments::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool { name } if name == "list_invoices"));
    }

    #[tokio::test]
    async fn missing_argument_fails_without_network() {
        let server = offline_server();
        let err = server
            .dispatch("list_people_by_team", &crate::args::Arguments::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MissingArgument { name: "team_id" }
        ));
    }

    #[tokio::test]
    async fn invalid_date_fails_without_network() {
        let server = offline_server();
        let arguments = json!({"start": "January 1st", "end": "2025-02-01"});
        let err = server
            .dispatch("list_actuals_by_date_range", arguments.as_object().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidArgument { name: "start", .. }
        ));
    }

    #[tokio::test]
    async fn catalog_lists_every_tool() {
        let server = offline_server();
        let schemas = server.registry().list_schemas();
        let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
        for expected in [
            "billable_hours",
            "list_actuals",
            "list_actuals_by_date_range",
            "list_actuals_by_person",
            "list_actuals_by_project",
            "list_assignments",
            "list_assignments_by_person",
            "list_assignments_by_project",
            "list_clients",
            "list_people",
            "list_people_by_team",
            "list_projects",
            "list_rate_cards",
            "list_rate_cards_by_project",
            "list_roles",
            "list_roles_by_person",
            "list_skills",
            "list_teams",
            "runn_request",
        ] {
            assert!(names.contains(&expected), "missing tool {expected}");
        }
        assert_eq!(names.len(), 19);
    }

    #[tokio::test]
    async fn initialize_advertises_tools_capability() {
        let server = offline_server();
        let request = JsonRpcRequest::new(1, "initialize", None);
        let response = server.handle_request(request).await.unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let server = offline_server();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };
        assert!(server.handle_request(request).await.is_none());
    }

    #[tokio::test]
    async fn tool_call_shapes_validation_errors_as_tool_errors() {
        let server = offline_server();
        let request = JsonRpcRequest::new(
            7,
            "tools/call",
            Some(json!({"name": "list_people_by_team", "arguments": {}})),
        );
        let response = server.handle_request(request).await.unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("team_id"));
    }

    #[tokio::test]
    async fn unknown_method_is_a_protocol_error() {
        let server = offline_server();
        let request = JsonRpcRequest::new(2, "resources/list", None);
        let response = server.handle_request(request).await.unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
