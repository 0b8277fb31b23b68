use std::net::SocketAddr;
use std::sync::Arc;

use airres_api::{app, AppState};
use airres_store::{app_config::Config, DbClient, EventProducer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airres_api=debug,airres_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting airres API on port {}", config.server.port);

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to Postgres")?;
    if config.database.run_migrations {
        db.migrate().await.context("Failed to run migrations")?;
    }

    let events = match &config.kafka {
        Some(kafka) => Some(Arc::new(
            EventProducer::new(&kafka.brokers).context("Failed to create Kafka producer")?,
        )),
        None => {
            tracing::info!("Kafka not configured, reservation events disabled");
            None
        }
    };

    let app = app(AppState::from_postgres(&db, events));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
