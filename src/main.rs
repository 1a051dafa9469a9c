//! Sensorhub - room monitoring backend
//!
//! Main entry point.

use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensorhub::{
    activity::ActivityService,
    alert::{AlertRepository, AlertService},
    climate::{ClimateRepository, ClimateService},
    motion_log::{MotionLogRepository, MotionLogService},
    relay::{RelayRepository, RelayService},
    state::{AppConfig, AppState},
    threshold_store::{ThresholdRepository, ThresholdStore},
    web_api,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensorhub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting sensorhub v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    tracing::info!(
        database_url = %config.database_url,
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    // Create database pool
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected");

    // Initialize components
    let motion_repo = MotionLogRepository::new(pool.clone());
    let motion = Arc::new(MotionLogService::new(motion_repo.clone()));
    let activity = Arc::new(ActivityService::new(motion_repo));

    let climate = Arc::new(ClimateService::new(ClimateRepository::new(pool.clone())));

    let thresholds = Arc::new(ThresholdStore::new(ThresholdRepository::new(pool.clone())).await?);
    tracing::info!("ThresholdStore initialized");

    let alerts = Arc::new(AlertService::new(
        thresholds.clone(),
        AlertRepository::new(pool.clone()),
    ));

    let relay = Arc::new(RelayService::new(RelayRepository::new(pool.clone())));

    // Create application state
    let state = AppState {
        pool,
        config,
        motion,
        activity,
        climate,
        thresholds,
        alerts,
        relay,
    };

    // Sensor dashboards are served from anywhere on the LAN, keep CORS open
    let app = web_api::create_router(state.clone())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
