use anyhow::Context;
use blackjack_server::{Api, Config, MemoryStore, Service, Sessions};
use clap::Parser;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::{debug, error, info};

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Overrides the port from the config file.
    #[arg(short, long)]
    port: Option<u16>,

    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    let config = config.validate().context("invalid config")?;

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // Create session store
    let store = Arc::new(MemoryStore::new(config.session_ttl));
    tokio::spawn({
        let store = store.clone();
        async move {
            let mut interval = tokio::time::interval(PURGE_INTERVAL);
            loop {
                interval.tick().await;
                match store.purge_expired() {
                    Ok(0) => {}
                    Ok(purged) => debug!(purged, "purged expired sessions"),
                    Err(e) => error!("failed to purge sessions: {}", e),
                }
            }
        }
    });

    let service = Arc::new(Service::new(Sessions::new(store)));
    let app = Api::new(service, config.rate_limit).router();

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("axum server error")?;

    Ok(())
}
