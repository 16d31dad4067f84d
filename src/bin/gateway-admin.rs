use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    palette_mcp_gateway::infra::logging::init();
    palette_mcp_gateway::cli::run().await
}
