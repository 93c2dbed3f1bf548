use okey_scorekeeper::{
    config::DEFAULT_LOG_FILTER,
    routes,
    storage::{InMemoryKeyValueStore, KeyValueStore, PostgresKeyValueStore},
    AppConfig, AppState,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!(%err, "Okey scorekeeper stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(bind_addr = %config.bind_addr, "Starting Okey scorekeeper");

    let store: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url).await?;
            let postgres = PostgresKeyValueStore::new(pool);
            postgres.ensure_schema().await?;
            info!("Using PostgreSQL storage");
            Arc::new(postgres)
        }
        None => {
            info!("Using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let app_state = AppState::initialize(store).await;
    let app = routes::router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
