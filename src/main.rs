//! Contacts API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts_service::domain::gateways::ContactRepository;
use contacts_service::infrastructure::driven_adapters::config::{AppConfig, StoreBackend};
use contacts_service::infrastructure::driven_adapters::contact_repository::{
    InMemoryContactRepository, PostgresContactRepository,
};
use contacts_service::infrastructure::driven_adapters::database;
use contacts_service::infrastructure::driving_adapters::api_rest::router::build_router;
use contacts_service::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(mode = ?config.server.mode, "Configuration loaded successfully");

    // Create repository
    let contact_repository: Arc<dyn ContactRepository> = match config.database.backend {
        StoreBackend::Postgres => {
            let pool = database::create_pool(&config.database).await?;
            tracing::info!("Database connection pool created");

            database::run_migrations(&pool).await?;
            tracing::info!("Database migrations completed");

            Arc::new(PostgresContactRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory contact store; data is lost on restart");
            Arc::new(InMemoryContactRepository::new())
        }
    };

    // Build router
    let app = build_router(AppState::new(contact_repository), &config);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "Server terminated unexpectedly");
        return Err(err.into());
    }

    Ok(())
}
