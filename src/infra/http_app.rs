use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::tools::mcp_router;
use crate::tools::registry::ToolRegistry;

/// MCP-only app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(registry: ToolRegistry) -> Router {
    mcp_routes(registry.clone()).with_state(registry)
}

/// MCP app plus the REST dispatch (`/`, `/tools`, `/mcp/run`) and the
/// JSON-RPC shim at `/v1/rpc`.
pub fn build_app_with_rest(registry: ToolRegistry) -> Router {
    mcp_routes(registry.clone())
        .route("/", get(crate::api::rest::root))
        .route("/tools", get(crate::api::rest::tools))
        .route("/mcp/run", post(crate::api::rest::run))
        .route("/v1/rpc", post(crate::api::mcp::http))
        .with_state(registry)
}

fn mcp_routes(registry: ToolRegistry) -> Router<ToolRegistry> {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = make_streamable_http_service(mcp_router::factory(registry), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}
