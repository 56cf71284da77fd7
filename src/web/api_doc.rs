use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::state::ConnectivityResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::state::airplane,
        super::api::state::environment,
        super::api::state::simulator,
        super::api::state::status,
        super::api::recording::status,
        super::api::recording::start,
        super::api::recording::stop,
        super::api::events::events,
    ),
    components(
        schemas(
            ConnectivityResponse,
            ErrorResponse,
            crate::model::AirplaneState,
            crate::model::EnvironmentState,
            crate::model::TimeOfDay,
            crate::model::SimulatorState,
            crate::state::RecordingState,
            crate::state::RecordingStatus,
        )
    ),
    info(
        title = "Simdeck Companion API",
        description = "Latest simulator snapshots and recording control for the companion UI",
        version = "0.1.0"
    ),
    tags(
        (name = "state", description = "Per-entity snapshot accessors"),
        (name = "recording", description = "Recording lifecycle control"),
        (name = "events", description = "Push notifications")
    )
)]
pub struct ApiDoc;
