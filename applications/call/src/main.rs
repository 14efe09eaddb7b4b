/// HttpExchange Call - aggregating service over the user registry
use anyhow::Context;
use clap::Parser;
use exchange_call::{create_router, CallConfig};
use exchange_client::UserServerClient;
use exchange_server::{shutdown::shutdown_signal, AppState};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "exchange-call")]
#[command(about = "HttpExchange aggregating call service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EXCHANGE_CALL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the registry server base URL
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exchange_call=info,exchange_client=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config =
        CallConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(upstream) = cli.upstream {
        config.upstream.base_url = upstream;
    }
    config.validate()?;

    tracing::info!("Starting HttpExchange Call");
    tracing::info!("Upstream: {}", config.upstream.base_url);

    let client = UserServerClient::new(config.upstream.client_config())
        .context("Failed to create registry client")?;

    // Not fatal: the registry may come up after us
    match client.health().await {
        Ok(health) => tracing::info!(
            "Registry server reachable (status {}, version {})",
            health.status,
            health.version
        ),
        Err(e) => tracing::warn!("Registry server not reachable yet: {}", e),
    }

    let app = create_router(AppState::new(Arc::new(client)));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .context("Invalid server.host")?,
        config.server.port,
    ));

    tracing::info!("Call service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Call service stopped");
    Ok(())
}
