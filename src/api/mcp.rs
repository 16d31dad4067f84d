//! JSON-RPC shim over the tool registry, mounted at `/v1/rpc`.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::GatewayError;
use crate::core::mcp::{InitializeResult, RpcReq, RpcResp};
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema }))
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, GatewayError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or(GatewayError::MissingField("name"))?;
    let args = match params.get("arguments") {
        Some(J::Null) | None => json!({}),
        Some(v) => v.clone(),
    };
    reg.call(name, &args).await
}

/// Takes the raw body so malformed JSON yields a -32700 envelope rather than
/// the extractor's plain-text rejection.
pub async fn http(State(reg): State<ToolRegistry>, body: String) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "rpc parse error");
            return http_json::parse_error(format!("parse error: {e}"));
        }
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc handler invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => {
            let init = serde_json::to_value(InitializeResult::for_this_server()).unwrap_or(J::Null);
            http_json::ok(id, init).0
        }
        "shutdown" => http_json::ok(id, J::Null).0,
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)).0,
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out).0,
            Err(e) => {
                let resp = http_json::from_gateway_error(id, e).0;
                tracing::warn!(response = ?resp, "tools.call error response");
                resp
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)).0,
    };
    tracing::trace!(response = ?resp, "rpc handler completed");
    Json(resp)
}
