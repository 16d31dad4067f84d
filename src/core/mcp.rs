//! Shared JSON-RPC surface used by the `/v1/rpc` shim.

use serde::{Deserialize, Serialize};
use serde_json::Value as J;

#[derive(Deserialize, Debug)]
pub struct RpcReq {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: J,
    pub method: String,
    #[serde(default)]
    pub params: J,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcResp {
    pub jsonrpc: &'static str,
    pub id: J,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<J>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErr>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RpcErr {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<J>,
}

pub fn ok(id: J, result: J) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: Some(result), error: None }
}
pub fn err(id: J, code: i32, msg: impl Into<String>, data: Option<J>) -> RpcResp {
    RpcResp { jsonrpc: "2.0", id, result: None, error: Some(RpcErr { code, message: msg.into(), data }) }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub server_info: ServerInfo,
    #[serde(default)]
    pub capabilities: J,
}

impl InitializeResult {
    pub fn for_this_server() -> Self {
        Self {
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            capabilities: serde_json::json!({ "tools": {} }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_serializes_initialize_result() {
        let v = InitializeResult {
            server_info: ServerInfo { name: "gw".into(), version: "0.1".into() },
            capabilities: J::Null,
        };
        let s = serde_json::to_string(&v).unwrap();
        assert!(s.contains("serverInfo"));
    }

    #[test]
    fn server_info_names_this_crate() {
        let v = InitializeResult::for_this_server();
        assert_eq!(v.server_info.name, "palette-mcp-gateway");
    }

    #[test]
    fn request_without_id_is_a_notification() {
        let req: RpcReq = serde_json::from_str(r#"{"jsonrpc":"2.0","method":"shutdown"}"#).unwrap();
        assert!(req.id.is_null());
        assert!(req.params.is_null());
    }

    #[test]
    fn error_envelope_omits_result() {
        let resp = err(J::from(7), -32601, "nope", None);
        let v = serde_json::to_value(&resp).unwrap();
        assert!(v.get("result").is_none());
        assert_eq!(v["error"]["code"], -32601);
        assert!(v["error"].get("data").is_none());
    }
}
