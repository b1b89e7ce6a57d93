//! MCP request dispatch.
//!
//! Transport-agnostic: the stdio and HTTP transports both hand raw JSON-RPC
//! text to [`McpHandler::handle_line`] and write back whatever it returns.
//! Notifications produce no response.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use securerand_shared::{
    CallToolParams, CallToolResult, GetPromptParams, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListChangedCapability, ListPromptsResult,
    ListToolsResult, RequestId, ServerCapabilities, JSONRPC_VERSION, LATEST_PROTOCOL_VERSION,
    SUPPORTED_PROTOCOL_VERSIONS,
};

use crate::app::App;
use crate::use_cases::ToolError;

const INSTRUCTIONS: &str = "Cryptographically secure random generation. Use the generate_* tools \
     for integers, floats, bytes, UUIDs, strings, choices and booleans instead of inventing \
     random values yourself.";

/// Handles MCP messages against a shared [`App`].
#[derive(Clone)]
pub struct McpHandler {
    app: Arc<App>,
}

impl McpHandler {
    pub fn new(app: Arc<App>) -> Self {
        Self { app }
    }

    /// Handle one raw JSON-RPC message.
    pub fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(line) {
            Ok(value) => self.handle_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse JSON-RPC message");
                Some(JsonRpcResponse::failure(
                    None,
                    JsonRpcError::parse_error(format!("Parse error: {e}")),
                ))
            }
        }
    }

    /// Handle a message that is valid JSON but not yet known to be a request.
    pub fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        if !value.is_object() {
            tracing::warn!("JSON-RPC message is not an object");
            return Some(JsonRpcResponse::failure(
                None,
                JsonRpcError::invalid_request("Request must be a JSON object"),
            ));
        }
        // Recover the id first so a malformed request can still be answered
        let id = value
            .get("id")
            .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());

        let request = match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid JSON-RPC request");
                return Some(JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_request(format!("Invalid request: {e}")),
                ));
            }
        };
        if request.jsonrpc != JSONRPC_VERSION {
            tracing::warn!(version = %request.jsonrpc, "Unsupported JSON-RPC version");
            return Some(JsonRpcResponse::failure(
                request.id,
                JsonRpcError::invalid_request(format!(
                    "Unsupported jsonrpc version '{}'",
                    request.jsonrpc
                )),
            ));
        }
        self.handle_request(request)
    }

    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let JsonRpcRequest {
            method, params, id, ..
        } = request;

        let Some(id) = id else {
            tracing::debug!(method = %method, "Notification received");
            return None;
        };

        let response = match self.dispatch(&method, params) {
            Ok(result) => JsonRpcResponse::success(Some(id), result),
            Err(error) => {
                tracing::warn!(method = %method, code = error.code, error = %error.message, "Request failed");
                JsonRpcResponse::failure(Some(id), error)
            }
        };
        Some(response)
    }

    fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, JsonRpcError> {
        match method {
            "initialize" => self.initialize(params),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.app.tools.descriptors(),
            }),
            "tools/call" => self.call_tool(params),
            "prompts/list" => to_result(&ListPromptsResult {
                prompts: self.app.prompts.descriptors(),
            }),
            "prompts/get" => self.get_prompt(params),
            _ => Err(JsonRpcError::method_not_found(method)),
        }
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = decode_params(params)?;
        let protocol_version = if SUPPORTED_PROTOCOL_VERSIONS.contains(&params.protocol_version.as_str())
        {
            params.protocol_version
        } else {
            LATEST_PROTOCOL_VERSION.to_string()
        };
        tracing::info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()).unwrap_or("unknown"),
            protocol_version = %protocol_version,
            "Client initialized"
        );
        to_result(&InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ListChangedCapability {
                    list_changed: false,
                }),
                prompts: Some(ListChangedCapability {
                    list_changed: false,
                }),
            },
            server_info: self.app.server_info.clone(),
            instructions: Some(INSTRUCTIONS.to_string()),
        })
    }

    fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = decode_params(params)?;
        let result = match self
            .app
            .tools
            .call(&self.app.generator, &params.name, params.arguments)
        {
            Ok(envelope) => {
                tracing::debug!(tool = %params.name, "Tool call succeeded");
                let payload = serde_json::to_value(&envelope)
                    .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
                CallToolResult::structured(payload)
            }
            Err(e @ ToolError::UnknownOperation(_)) => {
                return Err(JsonRpcError::invalid_params(e.to_string())
                    .with_data(json!({ "kind": e.kind() })));
            }
            Err(e) => {
                tracing::info!(tool = %params.name, kind = e.kind(), error = %e, "Tool call rejected");
                CallToolResult::error(e.to_string())
            }
        };
        to_result(&result)
    }

    fn get_prompt(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: GetPromptParams = decode_params(params)?;
        let arguments = params.arguments.unwrap_or_default();
        let result = self
            .app
            .prompts
            .render(&params.name, &arguments)
            .map_err(|e| {
                JsonRpcError::invalid_params(e.to_string()).with_data(json!({ "kind": "unknown_prompt" }))
            })?;
        to_result(&result)
    }
}

fn decode_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, JsonRpcError> {
    let params = params.unwrap_or_else(|| json!({}));
    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SeededRandom};
    use chrono::{TimeZone, Utc};
    use securerand_shared::error_codes;

    fn handler() -> McpHandler {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 15, 9, 30, 0)
            .single()
            .expect("valid date");
        McpHandler::new(Arc::new(App::new(
            Arc::new(SeededRandom::new(99)),
            Arc::new(FixedClock(now)),
        )))
    }

    fn call(handler: &McpHandler, message: Value) -> JsonRpcResponse {
        handler
            .handle_line(&message.to_string())
            .expect("request with id gets a response")
    }

    fn result(response: JsonRpcResponse) -> Value {
        assert!(!response.is_error(), "unexpected error: {:?}", response.error);
        response.result.expect("result present")
    }

    fn error(response: JsonRpcResponse) -> JsonRpcError {
        response.error.expect("error present")
    }

    #[test]
    fn test_initialize_reports_server_info() {
        let response = call(
            &handler(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2025-03-26",
                    "capabilities": {},
                    "clientInfo": {"name": "inspector", "version": "1.0"}
                }
            }),
        );
        assert_eq!(response.id, Some(RequestId::Number(1)));
        let result = result(response);
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["serverInfo"]["name"], "securerand-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert_eq!(result["capabilities"]["prompts"]["listChanged"], false);
    }

    #[test]
    fn test_initialize_unknown_version_gets_latest() {
        let response = call(
            &handler(),
            json!({
                "jsonrpc": "2.0",
                "id": "init",
                "method": "initialize",
                "params": {"protocolVersion": "1999-01-01", "capabilities": {}}
            }),
        );
        assert_eq!(result(response)["protocolVersion"], LATEST_PROTOCOL_VERSION);
    }

    #[test]
    fn test_notifications_get_no_response() {
        let handler = handler();
        let initialized = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handler.handle_line(&initialized.to_string()).is_none());
        let other = json!({"jsonrpc": "2.0", "method": "notifications/cancelled", "params": {}});
        assert!(handler.handle_line(&other.to_string()).is_none());
    }

    #[test]
    fn test_null_id_request_is_answered() {
        let response = call(&handler(), json!({"jsonrpc": "2.0", "id": null, "method": "ping"}));
        assert_eq!(response.id, Some(RequestId::Null));
        let text = serde_json::to_string(&response).expect("serializes");
        assert!(text.contains("\"id\":null"), "{text}");
        assert_eq!(result(response), json!({}));
    }

    #[test]
    fn test_ping() {
        let response = call(&handler(), json!({"jsonrpc": "2.0", "id": 5, "method": "ping"}));
        assert_eq!(result(response), json!({}));
    }

    #[test]
    fn test_tools_list_advertises_seven_tools() {
        let response = call(&handler(), json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
        let tools = result(response)["tools"].as_array().cloned().expect("tools array");
        assert_eq!(tools.len(), 7);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
        assert_eq!(tools[3]["name"], "generate_uuid");
    }

    #[test]
    fn test_tool_call_returns_structured_envelope() {
        let response = call(
            &handler(),
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": {
                    "name": "generate_random_integer",
                    "arguments": {"min": 1, "max": 6, "count": 5}
                }
            }),
        );
        let result = result(response);
        assert_eq!(result["isError"], false);
        let envelope = &result["structuredContent"];
        assert_eq!(envelope["type"], "random_integers");
        assert_eq!(envelope["timestamp"], "2026-10-15T09:30:00.000000Z");
        assert_eq!(envelope["parameters"], json!({"min": 1, "max": 6, "count": 5}));
        let values = envelope["values"].as_array().expect("values");
        assert_eq!(values.len(), 5);
        assert!(values
            .iter()
            .all(|v| v.as_i64().is_some_and(|n| (1..=6).contains(&n))));

        let text = result["content"][0]["text"].as_str().expect("text content");
        let parsed: Value = serde_json::from_str(text).expect("text is the envelope JSON");
        assert_eq!(&parsed, envelope);
    }

    #[test]
    fn test_tool_validation_failure_is_error_result() {
        let response = call(
            &handler(),
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": {
                    "name": "generate_random_choice",
                    "arguments": {"choices": ["a", "b", "c"], "count": 4, "allow_duplicates": false}
                }
            }),
        );
        let result = result(response);
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Cannot select 4 unique items from 3 choices"
        );
        assert!(result.get("structuredContent").is_none());
    }

    #[test]
    fn test_unknown_tool_is_invalid_params() {
        let response = call(
            &handler(),
            json!({
                "jsonrpc": "2.0",
                "id": 6,
                "method": "tools/call",
                "params": {"name": "generate_random_color"}
            }),
        );
        let error = error(response);
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: generate_random_color");
        assert_eq!(error.data, Some(json!({"kind": "unknown_operation"})));
    }

    #[test]
    fn test_tools_call_without_name_is_invalid_params() {
        let response = call(
            &handler(),
            json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": {}}),
        );
        assert_eq!(error(response).code, error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_prompts() {
        let handler = handler();
        let listed = call(&handler, json!({"jsonrpc": "2.0", "id": 8, "method": "prompts/list"}));
        assert_eq!(result(listed)["prompts"][0]["name"], "generate_random");

        let rendered = call(
            &handler,
            json!({
                "jsonrpc": "2.0",
                "id": 9,
                "method": "prompts/get",
                "params": {"name": "generate_random", "arguments": {"type": "float"}}
            }),
        );
        let result = result(rendered);
        assert_eq!(result["messages"][0]["role"], "user");
        assert!(result["messages"][0]["content"]["text"]
            .as_str()
            .is_some_and(|t| t.contains("Type: float")));

        let unknown = call(
            &handler,
            json!({"jsonrpc": "2.0", "id": 10, "method": "prompts/get", "params": {"name": "nope"}}),
        );
        assert_eq!(error(unknown).code, error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_method() {
        let response = call(
            &handler(),
            json!({"jsonrpc": "2.0", "id": 11, "method": "resources/list"}),
        );
        let error = error(response);
        assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
        assert_eq!(error.message, "Method not found: resources/list");
    }

    #[test]
    fn test_malformed_json_is_parse_error_with_null_id() {
        let response = handler()
            .handle_line("{\"jsonrpc\": \"2.0\", \"id\": 1,")
            .expect("parse errors are answered");
        assert_eq!(response.id, None);
        assert_eq!(error(response).code, error_codes::PARSE_ERROR);
    }

    #[test]
    fn test_invalid_requests() {
        let handler = handler();
        let missing_method = call(&handler, json!({"jsonrpc": "2.0", "id": 12}));
        assert_eq!(missing_method.id, Some(RequestId::Number(12)));
        assert_eq!(error(missing_method).code, error_codes::INVALID_REQUEST);

        let wrong_version = call(&handler, json!({"jsonrpc": "1.0", "id": 13, "method": "ping"}));
        assert_eq!(error(wrong_version).code, error_codes::INVALID_REQUEST);

        let not_object = call(&handler, json!([1, 2, 3]));
        assert_eq!(error(not_object).code, error_codes::INVALID_REQUEST);
    }
}
