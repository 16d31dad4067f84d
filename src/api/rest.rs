//! Plain REST dispatch: `POST /mcp/run`, `GET /tools`, `GET /`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value as J};

use crate::core::error::GatewayError;
use crate::tools::registry::ToolRegistry;

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub tool: String,
    #[serde(default)]
    pub input: J,
}

pub async fn run(
    State(reg): State<ToolRegistry>,
    Json(req): Json<RunRequest>,
) -> Result<Json<J>, GatewayError> {
    tracing::debug!(tool = %req.tool, "run invoked");
    let input = if req.input.is_null() { json!({}) } else { req.input };
    let out = reg.call(&req.tool, &input).await?;
    Ok(Json(out))
}

pub async fn tools(State(reg): State<ToolRegistry>) -> Json<J> {
    Json(json!({ "tools": reg.names() }))
}

pub async fn root() -> Json<J> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
