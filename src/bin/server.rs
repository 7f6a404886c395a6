//! Server: reads config from env, opens the document store, seeds development data,
//! serves the inventory API until Ctrl-C.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use ward_inventory::{app, ensure_database_exists, insert_initial_data, AppState, Repositories, ServerConfig, StoreBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ward_inventory=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let repos = match config.backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            Repositories::postgres(pool, &config.schema).await?
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Repositories::in_memory()
        }
    };

    if config.is_development() {
        insert_initial_data(&repos).await?;
    }

    let router = app(AppState::new(repos.clone()));
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(environment = %config.environment, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    repos.close().await;
    tracing::info!("server stopped");
    Ok(())
}
