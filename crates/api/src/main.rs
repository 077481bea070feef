//! API server entry point.

use account_store::{AccountStore, InMemoryAccountStore, PostgresAccountStore};
use api::config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Binds the configured address and serves the app until shutdown.
async fn serve<S: AccountStore + 'static>(
    config: &Config,
    store: S,
    metrics_handle: PrometheusHandle,
) -> std::io::Result<()> {
    let state = api::create_default_state(store);
    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Pick the backing store and serve
    match config.database_url.as_deref() {
        Some(url) => {
            let store =
                PostgresAccountStore::connect(url, config.database_max_connections).await?;
            store.run_migrations().await?;
            tracing::info!("using PostgreSQL account store");
            serve(&config, store, metrics_handle).await?;
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory only");
            serve(&config, InMemoryAccountStore::new(), metrics_handle).await?;
        }
    }

    Ok(())
}
