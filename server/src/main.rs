use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use userboard_server::config::Config;
use userboard_server::routes::create_routes;
use userboard_server::state::AppState;
use userboard_server::store::{MemoryUserStore, PgUserStore, UserStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userboard_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = open_store(&config).await?;

    let app = create_routes(AppState::new(store), &config);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn UserStore>, Box<dyn Error>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set, users are kept in memory");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    let store = PgUserStore::connect_lazy(database_url)?;
    match store.migrate().await {
        Ok(()) => info!("Successfully connected to database"),
        Err(e) => warn!(error = %e, "Database unavailable, migration will be retried on first use"),
    }

    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
