use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brawl_gateway::api::state::AppState;
use brawl_gateway::config::AppConfig;
use brawl_gateway::upstream::{BrawlApiClient, UpstreamClient};

#[derive(Parser)]
#[command(name = "brawl-gateway")]
#[command(about = "REST gateway for Brawl Stars statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting brawl-gateway v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let upstream: Option<Arc<dyn UpstreamClient>> = match config.upstream.token.as_deref()
            {
                Some(token) => {
                    let client = BrawlApiClient::new(
                        &config.upstream.base_url,
                        token,
                        Duration::from_secs(config.upstream.timeout_seconds),
                    )?;
                    Some(Arc::new(client))
                }
                None => {
                    tracing::warn!(
                        "No upstream credential configured; data routes will return 500. \
                         Set BRAWL_API_TOKEN to enable them."
                    );
                    None
                }
            };

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState {
                config: Arc::new(config),
                upstream,
            };
            let app = brawl_gateway::api::build_router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::CheckConfig => {
            println!("Configuration OK");
            println!("  upstream base URL: {}", config.upstream.base_url);
            println!("  credential set:    {}", config.has_credential());
            println!(
                "  server:            {}:{}",
                config.server.host, config.server.port
            );
        }
    }

    Ok(())
}
