//! JSON-RPC 2.0 envelope types and the MCP content wrapper.

use serde::Serialize;
use serde_json::{Value, json};

/// JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` and `error` is populated. The `id` echoes the
/// request id, which may be any JSON value including null.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Build a success response for the given request id.
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response for the given request id.
    pub fn error(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// The request envelope is not a valid JSON-RPC 2.0 request.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The requested method or tool does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// The method parameters are missing or invalid.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Bearer authentication failed (HTTP transport only).
    pub const UNAUTHORIZED: i32 = -32001;

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: Self::INVALID_REQUEST,
            message: message.into(),
            data: None,
        }
    }

    /// Create a method not found error.
    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self {
            code: Self::METHOD_NOT_FOUND,
            message: message.into(),
            data: None,
        }
    }

    /// Create an invalid params error with optional context data.
    pub fn invalid_params(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code: Self::INVALID_PARAMS,
            message: message.into(),
            data,
        }
    }

    /// Create an authentication error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: Self::UNAUTHORIZED,
            message: message.into(),
            data: None,
        }
    }
}

/// Wrap a text blob in the MCP tool-call content envelope.
pub fn text_result(text: impl Into<String>) -> Value {
    json!({
        "content": [
            {
                "type": "text",
                "text": text.into(),
            }
        ],
        "isError": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_omits_error_field() {
        let response = JsonRpcResponse::result(json!(1), json!({"ok": true}));
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["id"], 1);
        assert_eq!(encoded["result"]["ok"], true);
        assert!(encoded.get("error").is_none());
    }

    #[test]
    fn test_error_response_omits_result_field() {
        let response = JsonRpcResponse::error(json!("abc"), JsonRpcError::method_not_found("no such method"));
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["error"]["code"], -32601);
        assert_eq!(encoded["error"]["message"], "no such method");
        assert!(encoded.get("result").is_none());
    }

    #[test]
    fn test_error_data_is_omitted_when_absent() {
        let encoded = serde_json::to_value(JsonRpcError::invalid_request("bad envelope")).unwrap();
        assert!(encoded.get("data").is_none());

        let with_data = JsonRpcError::invalid_params("bad type", Some(json!({"field": "workflowType"})));
        let encoded = serde_json::to_value(with_data).unwrap();
        assert_eq!(encoded["data"]["field"], "workflowType");
    }

    #[test]
    fn test_text_result_envelope_shape() {
        let value = text_result("hello");
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "hello");
        assert_eq!(value["isError"], false);
    }
}
