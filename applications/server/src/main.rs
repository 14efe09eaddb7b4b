/// HttpExchange Server - in-memory user registry over HTTP
use anyhow::Context;
use clap::Parser;
use exchange_core::LocalUserService;
use exchange_server::{config::ServerConfig, create_router, shutdown::shutdown_signal, AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "exchange-server")]
#[command(about = "HttpExchange user registry server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EXCHANGE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "exchange_server=info,exchange_core=info,tower_http=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config =
        ServerConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    tracing::info!("Starting HttpExchange Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize user service
    let service = LocalUserService::new();
    if config.users.seed_demo_data {
        service.seed_demo_users().await;
    }

    // Build application state and router
    let app_state = AppState::new(Arc::new(service));
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .context("Invalid server.host")?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
