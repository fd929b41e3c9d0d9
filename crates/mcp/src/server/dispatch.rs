//! JSON-RPC method dispatch shared by the stdio and HTTP transports.

use serde_json::{Value, json};
use tracing::debug;

use crate::catalog::tool_descriptors;
use crate::protocol::{JsonRpcError, JsonRpcResponse};
use crate::server::tools::call_tool;
use crate::{PROTOCOL_VERSION, SERVER_NAME};

/// Dispatch one parsed JSON-RPC message and produce the response, if any.
///
/// Messages without an `id` are notifications and never produce a response,
/// not even for unknown methods or invalid envelopes. Everything else is
/// answered inline; no request can terminate the server.
pub fn dispatch(raw: &Value) -> Option<JsonRpcResponse> {
    let id = raw.get("id").cloned();
    let Some(id) = id else {
        debug!(method = raw.get("method").and_then(serde_json::Value::as_str), "ignoring notification");
        return None;
    };

    if raw.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Some(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_request("request is missing jsonrpc: \"2.0\""),
        ));
    }

    let Some(method) = raw.get("method").and_then(Value::as_str) else {
        return Some(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_request("request is missing a method string"),
        ));
    };

    debug!(method, "dispatching request");
    let outcome = match method {
        "initialize" => Ok(initialize_result()),
        "tools/list" => Ok(json!({ "tools": tool_descriptors() })),
        "tools/call" => handle_tools_call(raw.get("params")),
        "resources/list" => Ok(json!({ "resources": [] })),
        "prompts/list" => Ok(json!({ "prompts": [] })),
        other => Err(JsonRpcError::method_not_found(format!("Method not found: {other}"))),
    };

    Some(match outcome {
        Ok(result) => JsonRpcResponse::result(id, result),
        Err(error) => JsonRpcResponse::error(id, error),
    })
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

fn handle_tools_call(params: Option<&Value>) -> Result<Value, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params", None))?;
    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params("tools/call params require a tool name", None))?;
    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
    call_tool(tool_name, arguments)
}
