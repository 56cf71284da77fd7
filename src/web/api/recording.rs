use axum::{extract::State, Json};

use crate::state::RecordingStatus;
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/api/recording",
    responses(
        (status = 200, description = "Current recording status", body = RecordingStatus)
    ),
    tag = "recording"
)]
pub async fn status(State(state): State<AppState>) -> Json<RecordingStatus> {
    Json(state.stores.recording.status())
}

#[utoipa::path(
    post,
    path = "/api/recording/start",
    responses(
        (status = 200, description = "Recording started", body = RecordingStatus)
    ),
    tag = "recording"
)]
pub async fn start(State(state): State<AppState>) -> Json<RecordingStatus> {
    Json(state.stores.recording.start())
}

#[utoipa::path(
    post,
    path = "/api/recording/stop",
    responses(
        (status = 200, description = "Recording stopping", body = RecordingStatus)
    ),
    tag = "recording"
)]
pub async fn stop(State(state): State<AppState>) -> Json<RecordingStatus> {
    Json(state.stores.recording.stop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RecordingState, Stores};
    use std::sync::Arc;
    use std::time::Duration;

    fn app_state() -> AppState {
        AppState {
            stores: Arc::new(Stores::new(Duration::from_millis(100))),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn start_and_stop_round_trip() {
        let state = app_state();

        let Json(initial) = status(State(state.clone())).await;
        assert_eq!(initial.state, RecordingState::Idle);

        let Json(started) = start(State(state.clone())).await;
        assert_eq!(started.state, RecordingState::Recording);

        let Json(stopping) = stop(State(state.clone())).await;
        assert_eq!(stopping.state, RecordingState::Stopping);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let Json(settled) = status(State(state)).await;
        assert_eq!(settled.state, RecordingState::Idle);
    }
}
