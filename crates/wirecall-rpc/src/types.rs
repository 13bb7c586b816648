//! Request and response wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::version::ProtocolVersion;

/// A single JSON-RPC request, one per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    pub id: u64,
    /// Positional arguments. `None` means the key is omitted from the body
    /// entirely, which is only legal under 2.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
}

impl Request {
    /// Build a request for the given dialect.
    ///
    /// Pre-2.0 dialects require `params` in every request, even when empty.
    /// Under 2.0 the member is included only when there are arguments.
    pub fn new(
        version: ProtocolVersion,
        method: impl Into<String>,
        id: u64,
        args: Vec<Value>,
    ) -> Self {
        let params = if version.requires_params() || !args.is_empty() {
            Some(args)
        } else {
            None
        };

        Self {
            jsonrpc: version.as_str().to_string(),
            method: method.into(),
            id,
            params,
        }
    }
}

/// A parsed JSON-RPC response body.
///
/// Every field is optional: pre-2.0 servers omit `jsonrpc`, and `error` /
/// `result` each appear only on their side of the outcome. A JSON `null`
/// collapses to `None`, so `"error": null` reads as no error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Echo of the request id. Carried for inspection, never validated.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_always_present_before_2_0() {
        for version in [ProtocolVersion::V1_0, ProtocolVersion::V1_1] {
            let request = Request::new(version, "getaccount", 1, vec![]);
            let body = serde_json::to_value(&request).unwrap();
            assert_eq!(body["params"], json!([]));
            assert_eq!(body["jsonrpc"], json!(version.as_str()));
        }
    }

    #[test]
    fn test_params_omitted_under_2_0_without_args() {
        let request = Request::new(ProtocolVersion::V2_0, "ping", 1, vec![]);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.as_object().unwrap().get("params").is_none());
    }

    #[test]
    fn test_params_included_under_2_0_with_args() {
        let request = Request::new(ProtocolVersion::V2_0, "sum", 7, vec![json!(1), json!(2)]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["params"], json!([1, 2]));
        assert_eq!(body["id"], json!(7));
    }

    #[test]
    fn test_response_null_error_reads_as_absent() {
        let response: Response =
            serde_json::from_value(json!({"id": 1, "error": null, "result": "ok"})).unwrap();
        assert!(response.error.is_none());
        assert!(response.jsonrpc.is_none());
        assert_eq!(response.result, Some(json!("ok")));
    }

    #[test]
    fn test_response_must_be_an_object() {
        assert!(serde_json::from_str::<Response>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Response>("not json").is_err());
    }
}
