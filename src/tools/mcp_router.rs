//! rmcp tool router exposing the registry's tools over MCP (stdio and
//! streamable HTTP). Each tool returns the same plain JSON as `/mcp/run`,
//! delivered as `structuredContent`.

use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::JsonObject;
use rmcp::ErrorData;

use crate::core::error::GatewayError;
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::registry::{build_registry, ToolRegistry};
use crate::tools::{hello, palette};

#[derive(Clone)]
pub struct PaletteSvc {
    registry: ToolRegistry,
}

impl ServerHandler for PaletteSvc {}

impl From<GatewayError> for ErrorData {
    fn from(e: GatewayError) -> Self {
        if e.is_client_error() {
            ErrorData::invalid_params(e.to_string(), None)
        } else {
            ErrorData::internal_error(e.to_string(), None)
        }
    }
}

#[rmcp::tool_router]
impl PaletteSvc {
    #[rmcp::tool(
        name = "palette_generator",
        description = "Generate a color-harmony palette. Arguments: base_color (#RGB or #RRGGBB), mode (complementary | analogous | triadic | split_complementary | tetradic). Returns {\"palette\": [...]}"
    )]
    async fn palette_generator(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, ErrorData> {
        self.dispatch(palette::NAME, params.0).await
    }

    #[rmcp::tool(
        name = "remote_hello",
        description = "Return a friendly greeting. Optional argument: name (or user)"
    )]
    async fn remote_hello(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, ErrorData> {
        self.dispatch(hello::NAME, params.0).await
    }
}

pub type PaletteRouter = ToolRouter<PaletteSvc>;

impl PaletteSvc {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn router() -> PaletteRouter {
        Self::tool_router()
    }

    async fn dispatch(
        &self,
        tool: &str,
        args: JsonObject,
    ) -> Result<rmcp::Json<serde_json::Value>, ErrorData> {
        tracing::debug!(tool, args = ?args, "mcp tool invoked");
        let out = self
            .registry
            .call(tool, &serde_json::Value::Object(args))
            .await?;
        Ok(rmcp::Json(out))
    }
}

/// Factory shape required by the rmcp transports.
pub fn factory(registry: ToolRegistry) -> impl Fn() -> (PaletteSvc, PaletteRouter) + Clone + Send + Sync + 'static {
    move || (PaletteSvc::new(registry.clone()), PaletteSvc::router())
}

pub fn default_factory() -> (PaletteSvc, PaletteRouter) {
    (PaletteSvc::new(build_registry()), PaletteSvc::router())
}
