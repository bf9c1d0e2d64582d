//! Server: reads config from env, prepares the subjects table, mounts subject, common and docs routes.

use std::sync::Arc;
use subjects_api::{
    app_router, ensure_database_exists, AppConfig, AppState, InMemorySubjectStore, PgSubjectStore, StoreKind,
    SubjectStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subjects_api=info,tower_http=info")),
        )
        .init();

    let store: Arc<dyn SubjectStore> = match config.store {
        StoreKind::Postgres => {
            if config.create_database {
                ensure_database_exists(&config.database_url).await?;
            }
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            Arc::new(PgSubjectStore::new(pool, &config.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; subjects are lost on exit");
            Arc::new(InMemorySubjectStore::new())
        }
    };
    store.initialize().await?;

    let app = app_router(AppState::new(store));
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
