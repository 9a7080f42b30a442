//! REST API routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use drift_core::{
    grid_coordinates, simulate_drift, BoundingBox, DriftProfile, LaunchState, TrajectoryPoint,
};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(|| async { "OK" }))
        .route("/trajectory_t1", post(trajectory_t1))
        .route("/trajectory_t2", post(trajectory_t2))
        .route("/trajectory_t3", post(trajectory_t3))
        .route("/trajectory_t1r", post(trajectory_t1r))
        .route("/trajectory_t2r", post(trajectory_t2r))
        .route("/trajectory_t3r", post(trajectory_t3r))
        .route("/windgrid", post(windgrid))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct TrajectoryRequest {
    pub lat: f64,
    pub lon: f64,
    /// Launch altitude in meters; carried through unchanged by the
    /// fixed-count profile, depleted by the descent profiles.
    pub altitude: f64,
    /// Vertical speed in m/s; <= 0 selects the server-side default.
    pub speed: f64,
}

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub trajectory: Vec<TrajectoryPoint>,
    /// Provenance of the single wind sample used for the whole run.
    pub src: String,
}

#[derive(Debug, Serialize)]
pub struct WindGridPoint {
    pub lat: f64,
    pub lon: f64,
    pub dir_deg: f64,
    pub speed_ms: f64,
    pub src: String,
}

#[derive(Debug, Serialize)]
pub struct WindGridResponse {
    pub points: Vec<WindGridPoint>,
}

// === Handlers ===

/// Shared engine behind all six trajectory endpoints: the endpoints differ
/// only in (profile, wind direction sign).
async fn run_trajectory(
    state: Arc<AppState>,
    req: TrajectoryRequest,
    profile: DriftProfile,
    reverse: bool,
) -> Json<TrajectoryResponse> {
    // One resolve per run; the wind layer is treated as static over the
    // flight and its label is the provenance for every returned point.
    let wind = state.resolver().resolve(req.lat, req.lon).await;
    let start = LaunchState {
        lat: req.lat,
        lon: req.lon,
        altitude_m: req.altitude,
        descent_mps: req.speed,
    };
    let trajectory = simulate_drift(start, &wind, profile, reverse);
    Json(TrajectoryResponse {
        trajectory,
        src: wind.source.label().to_string(),
    })
}

async fn trajectory_t1(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    run_trajectory(state, req, DriftProfile::FixedCount, false).await
}

async fn trajectory_t2(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    run_trajectory(state, req, DriftProfile::AltitudeDepletion, false).await
}

async fn trajectory_t3(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    let mass_kg = state.config().payload_mass_kg;
    run_trajectory(
        state,
        req,
        DriftProfile::MassScaledDepletion { mass_kg },
        false,
    )
    .await
}

async fn trajectory_t1r(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    run_trajectory(state, req, DriftProfile::FixedCount, true).await
}

async fn trajectory_t2r(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    run_trajectory(state, req, DriftProfile::AltitudeDepletion, true).await
}

async fn trajectory_t3r(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrajectoryRequest>,
) -> Json<TrajectoryResponse> {
    let mass_kg = state.config().payload_mass_kg;
    run_trajectory(
        state,
        req,
        DriftProfile::MassScaledDepletion { mass_kg },
        true,
    )
    .await
}

async fn windgrid(
    State(state): State<Arc<AppState>>,
    Json(bbox): Json<BoundingBox>,
) -> Json<WindGridResponse> {
    let mut points = Vec::new();
    for (lat, lon) in grid_coordinates(&bbox) {
        // Each point resolves independently: cache and fallback state are
        // per-coordinate, so source labels may differ across the grid.
        let wind = state.resolver().resolve(lat, lon).await;
        points.push(WindGridPoint {
            lat,
            lon,
            dir_deg: wind.direction_deg,
            speed_ms: wind.speed_ms,
            src: wind.source.label().to_string(),
        });
    }
    Json(WindGridResponse { points })
}

async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "service": "drift-server",
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Server is running. Open /static/index.html for the map UI."
    }))
}
