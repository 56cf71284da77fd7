use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{AirplaneState, EnvironmentState, SimulatorState};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectivityResponse {
    pub connected: bool,
}

#[utoipa::path(
    get,
    path = "/api/state/airplane",
    responses(
        (status = 200, description = "Latest airplane snapshot", body = AirplaneState),
        (status = 404, description = "No snapshot received yet", body = ErrorResponse)
    ),
    tag = "state"
)]
pub async fn airplane(State(state): State<AppState>) -> ApiResult<Json<AirplaneState>> {
    state
        .stores
        .airplane
        .get()
        .map(Json)
        .ok_or(ApiError::NoSnapshot("airplane"))
}

#[utoipa::path(
    get,
    path = "/api/state/environment",
    responses(
        (status = 200, description = "Latest environment snapshot", body = EnvironmentState),
        (status = 404, description = "No snapshot received yet", body = ErrorResponse)
    ),
    tag = "state"
)]
pub async fn environment(State(state): State<AppState>) -> ApiResult<Json<EnvironmentState>> {
    state
        .stores
        .environment
        .get()
        .map(Json)
        .ok_or(ApiError::NoSnapshot("environment"))
}

#[utoipa::path(
    get,
    path = "/api/state/simulator",
    responses(
        (status = 200, description = "Latest simulator snapshot", body = SimulatorState),
        (status = 404, description = "No snapshot received yet", body = ErrorResponse)
    ),
    tag = "state"
)]
pub async fn simulator(State(state): State<AppState>) -> ApiResult<Json<SimulatorState>> {
    state
        .stores
        .simulator
        .get()
        .map(Json)
        .ok_or(ApiError::NoSnapshot("simulator"))
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Whether the simulator link is up", body = ConnectivityResponse)
    ),
    tag = "state"
)]
pub async fn status(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    // Unset means no link event has arrived yet; the UI treats that as down.
    let connected = state.stores.connectivity.get().unwrap_or(false);
    Json(ConnectivityResponse { connected })
}
