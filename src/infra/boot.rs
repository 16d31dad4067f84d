use crate::infra::config::Config;
use crate::tools::{mcp_router, registry::build_registry};
use axum::Router;
use std::net::SocketAddr;

/// Pick the HTTP app for this config.
pub fn build_app(cfg: &Config) -> Router {
    let registry = build_registry();
    if cfg.deprecate_rest {
        crate::infra::http_app::build_app_default(registry)
    } else {
        crate::infra::http_app::build_app_with_rest(registry)
    }
}

pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    cfg.validate().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT palette-mcp-gateway"
    );

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.is_stdio() {
        crate::infra::runtime::mcp_transport::serve_stdio(mcp_router::default_factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = build_app(&cfg);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
