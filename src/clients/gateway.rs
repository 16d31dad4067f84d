use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::make_http_client;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

/// Client for a running gateway's REST surface.
#[derive(Clone)]
pub struct GatewayClient {
    base: String,
    http: Client,
}

#[derive(Deserialize)]
struct ToolsWire {
    tools: Vec<String>,
}

#[derive(Deserialize)]
struct PaletteWire {
    palette: Vec<String>,
}

#[derive(Deserialize)]
struct HelloWire {
    result: String,
}

#[derive(Deserialize)]
struct DetailWire {
    detail: String,
}

impl GatewayClient {
    pub fn new(base: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::with_client(base, make_http_client()?))
    }

    pub fn with_client(base: impl Into<String>, http: Client) -> Self {
        Self { base: base.into(), http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<DetailWire>(&body)
            .map(|d| d.detail)
            .unwrap_or(body);
        Err(ClientError::Rejected { status: status.as_u16(), detail })
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let (builder, rid) = add_standard_headers(self.http.get(self.url("/healthz")), None);
        tracing::debug!(request_id = %rid, base = %self.base, "health check");
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    pub async fn list_tools(&self) -> Result<Vec<String>, ClientError> {
        let (builder, _rid) = add_standard_headers(self.http.get(self.url("/tools")), None);
        let resp = Self::check(builder.send().await?).await?;
        Ok(resp.json::<ToolsWire>().await?.tools)
    }

    /// `POST /mcp/run` with `{tool, input}`; returns the tool's JSON output.
    pub async fn run_tool(&self, tool: &str, input: Value) -> Result<Value, ClientError> {
        let (builder, rid) = add_standard_headers(self.http.post(self.url("/mcp/run")), None);
        tracing::debug!(request_id = %rid, tool, "run_tool");
        let resp = builder.json(&json!({ "tool": tool, "input": input })).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json::<Value>().await?)
    }

    pub async fn palette(&self, base_color: &str, mode: &str) -> Result<Vec<String>, ClientError> {
        let out = self
            .run_tool(
                crate::tools::palette::NAME,
                json!({ "base_color": base_color, "mode": mode }),
            )
            .await?;
        let wire: PaletteWire = serde_json::from_value(out).map_err(|e| ClientError::Rejected {
            status: 200,
            detail: format!("unexpected palette payload: {e}"),
        })?;
        Ok(wire.palette)
    }

    pub async fn hello(&self, name: Option<&str>) -> Result<String, ClientError> {
        let input = match name {
            Some(n) => json!({ "name": n }),
            None => json!({}),
        };
        let out = self.run_tool(crate::tools::hello::NAME, input).await?;
        let wire: HelloWire = serde_json::from_value(out).map_err(|e| ClientError::Rejected {
            status: 200,
            detail: format!("unexpected greeting payload: {e}"),
        })?;
        Ok(wire.result)
    }
}
