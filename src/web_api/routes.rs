//! API Routes
//!
//! Sensor firmware reports readings as query parameters, so ingestion
//! endpoints take `Query` rather than JSON bodies.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::activity::ActivityHistory;
use crate::alert::ClimateAlerts;
use crate::climate::{ClimateHistory, ClimateReading};
use crate::error::Result;
use crate::models::ApiResponse;
use crate::motion_log::FallReading;
use crate::relay::RelayStatus;
use crate::state::AppState;
use crate::threshold_store::{ThresholdConfig, ThresholdUpdate};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(super::health_check))
        // Motion (PIR)
        .route("/api/motion", post(ingest_motion))
        .route("/api/motion/latest", get(latest_motion))
        // Vibration (fall sensor)
        .route("/api/vibration", post(ingest_vibration))
        .route("/api/vibration/latest", get(latest_vibration))
        // Climate (DHT)
        .route("/api/climate", post(ingest_climate))
        .route("/api/climate/latest", get(latest_climate))
        .route("/api/climate/history", get(climate_history))
        // Activity analytics
        .route("/api/activity/history", get(activity_history))
        // Thresholds
        .route("/api/thresholds", get(get_thresholds))
        .route("/api/thresholds", put(update_thresholds))
        // Relay
        .route("/api/relay", get(get_relay))
        .route("/api/relay", put(set_relay))
        .with_state(state)
}

// ========================================
// Motion Handlers
// ========================================

#[derive(Debug, Deserialize)]
struct MotionIngest {
    status: String,
    /// Encoded duration; firmware omits it on DETECTED events
    #[serde(default)]
    duration: i64,
}

async fn ingest_motion(
    State(state): State<AppState>,
    Query(req): Query<MotionIngest>,
) -> Result<impl IntoResponse> {
    state.motion.record_motion(&req.status, req.duration).await?;
    Ok(Json(ApiResponse::success("motion event recorded")))
}

async fn latest_motion(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let event = state.motion.latest_motion().await?;

    // Latest-reading clients expect the raw status string alongside the
    // decoded fields
    Ok(Json(json!({
        "status": if event.detected { "DETECTED" } else { "NO_MOTION" },
        "duration": event.duration,
        "fall_risk_level": event.fall_risk_level,
        "raw_duration": event.raw_duration,
        "timestamp": event.timestamp,
    })))
}

// ========================================
// Vibration Handlers
// ========================================

#[derive(Debug, Deserialize)]
struct VibrationIngest {
    status: String,
}

async fn ingest_vibration(
    State(state): State<AppState>,
    Query(req): Query<VibrationIngest>,
) -> Result<impl IntoResponse> {
    state.motion.record_fall(&req.status).await?;
    Ok(Json(ApiResponse::success("vibration event recorded")))
}

async fn latest_vibration(State(state): State<AppState>) -> Result<Json<FallReading>> {
    let reading = state.motion.latest_fall().await?;
    Ok(Json(reading))
}

// ========================================
// Climate Handlers
// ========================================

#[derive(Debug, Deserialize)]
struct ClimateIngest {
    temp: f64,
    humidity: f64,
}

/// Insert a climate reading, then evaluate both metrics against the
/// active thresholds. Triggered decisions are logged by the alert
/// service; the response carries both decisions either way.
async fn ingest_climate(
    State(state): State<AppState>,
    Query(req): Query<ClimateIngest>,
) -> Result<Json<ApiResponse<ClimateAlerts>>> {
    state.climate.record(req.temp, req.humidity).await?;
    let alerts = state.alerts.evaluate_climate(req.temp, req.humidity).await?;
    Ok(Json(ApiResponse::success(alerts)))
}

async fn latest_climate(State(state): State<AppState>) -> Result<Json<ClimateReading>> {
    let reading = state.climate.latest().await?;
    Ok(Json(reading))
}

#[derive(Debug, Deserialize)]
struct WindowQuery {
    days: Option<i64>,
}

async fn climate_history(
    State(state): State<AppState>,
    Query(window): Query<WindowQuery>,
) -> Result<Json<ClimateHistory>> {
    let history = state.climate.history(window.days).await?;
    Ok(Json(history))
}

// ========================================
// Activity Handlers
// ========================================

async fn activity_history(
    State(state): State<AppState>,
    Query(window): Query<WindowQuery>,
) -> Result<Json<ActivityHistory>> {
    let history = state.activity.history(window.days).await?;
    Ok(Json(history))
}

// ========================================
// Threshold Handlers
// ========================================

async fn get_thresholds(State(state): State<AppState>) -> Result<Json<ThresholdConfig>> {
    let config = state.thresholds.get().await?;
    Ok(Json(config))
}

async fn update_thresholds(
    State(state): State<AppState>,
    Query(req): Query<ThresholdUpdate>,
) -> Result<Json<ApiResponse<ThresholdConfig>>> {
    let config = state.thresholds.update(req).await?;
    Ok(Json(ApiResponse::success(config)))
}

// ========================================
// Relay Handlers
// ========================================

#[derive(Debug, Deserialize)]
struct RelayRequest {
    status: String,
}

async fn get_relay(State(state): State<AppState>) -> Result<Json<RelayStatus>> {
    let status = state.relay.status().await?;
    Ok(Json(status))
}

async fn set_relay(
    State(state): State<AppState>,
    Query(req): Query<RelayRequest>,
) -> Result<Json<ApiResponse<RelayStatus>>> {
    let status = state.relay.switch(&req.status).await?;
    Ok(Json(ApiResponse::success(status)))
}
