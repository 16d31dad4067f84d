use palette_mcp_gateway::infra;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let cfg = infra::config::Config::load()?;
    infra::boot::run_server(cfg).await
}
