use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::clients::gateway::GatewayClient;
use crate::infra::runtime::limits::make_http_client_with;

#[derive(Parser)]
#[command(name = "gateway-admin")]
#[command(about = "Palette MCP Gateway - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Show the layered configuration
    Config {
        /// Also check mode and port, failing on an invalid config
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and tools
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Generate a palette, remotely or in-process
    Palette {
        /// Service URL
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
        /// Base color, #RGB or #RRGGBB
        #[arg(short, long)]
        base_color: String,
        /// complementary | analogous | triadic | split_complementary | tetradic
        #[arg(short, long, default_value = "complementary")]
        mode: String,
        /// Compute locally instead of calling the service
        #[arg(long)]
        local: bool,
    },
    /// Call the greeting tool
    Hello {
        /// Service URL
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
        #[arg(short, long)]
        name: Option<String>,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate } => match load_config(validate) {
            Ok(cfg) => {
                println!("mode = {:?}", cfg.mode);
                println!("port = {}", cfg.port);
                println!("deprecate_rest = {}", cfg.deprecate_rest);
                if validate {
                    println!("✅ Configuration is valid");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Palette { url, base_color, mode, local } => {
            match palette(&url, &base_color, &mode, local).await {
                Ok(colors) => {
                    for c in colors {
                        println!("{c}");
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("❌ Palette failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Hello { url, name } => match hello(&url, name.as_deref()).await {
            Ok(greeting) => {
                println!("{greeting}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Hello failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn quick_client(url: &str) -> Result<GatewayClient, Box<dyn std::error::Error>> {
    let http = make_http_client_with(std::time::Duration::from_millis(500))?;
    Ok(GatewayClient::with_client(url, http))
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    quick_client(url)?.health().await?;
    Ok(())
}

fn load_config(validate: bool) -> Result<crate::infra::config::Config, Box<dyn std::error::Error>> {
    let config = crate::infra::config::Config::load()?;
    if validate {
        config.validate()?;
    }
    Ok(config)
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = GatewayClient::new(url)?;

    // Health check; a transport failure aborts, a non-2xx is reported
    let healthy = match client.health().await {
        Ok(()) => true,
        Err(crate::clients::gateway::ClientError::Rejected { .. }) => false,
        Err(e) => return Err(e.into()),
    };
    println!(
        "🏥 Health Status: {}",
        if healthy { "✅ Healthy" } else { "❌ Unhealthy" }
    );

    match client.list_tools().await {
        Ok(tools) => println!("🔧 Tools: ✅ {}", tools.join(", ")),
        Err(e) => println!("🔧 Tools: ❌ {}", e),
    }

    // Configuration summary
    let cfg = crate::infra::config::Config::from_env()?;
    println!("\n📋 Configuration:");
    println!("  Mode: {}", cfg.mode);
    println!("  Port: {}", cfg.port);
    println!("  REST enabled: {}", !cfg.deprecate_rest);
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    Ok(())
}

async fn palette(
    url: &str,
    base_color: &str,
    mode: &str,
    local: bool,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if local {
        return Ok(crate::domain::generate_palette(base_color, mode)?);
    }
    Ok(GatewayClient::new(url)?.palette(base_color, mode).await?)
}

async fn hello(url: &str, name: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    Ok(GatewayClient::new(url)?.hello(name).await?)
}
