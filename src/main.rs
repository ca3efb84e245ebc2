use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use awesome_events_api::api::{self, AppState};
use awesome_events_api::config::{Config, Storage};
use awesome_events_api::domain::repositories::EventRepository;
use awesome_events_api::infrastructure::repositories::{
    InMemoryEventRepository, PostgresEventRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let events: Arc<dyn EventRepository> = match config.storage {
        Storage::InMemory => {
            tracing::warn!("DATABASE_URL not set, events are kept in memory");
            Arc::new(InMemoryEventRepository::new())
        }
        Storage::Postgres {
            url,
            max_connections,
        } => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(&url)
                .await?;
            tracing::info!("Database connected successfully");

            sqlx::migrate!().run(&pool).await?;
            tracing::info!("Migrations run successfully");

            Arc::new(PostgresEventRepository::new(pool))
        }
    };

    let app = api::router(AppState::new(events));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
