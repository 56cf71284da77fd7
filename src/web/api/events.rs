use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use serde::Serialize;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

use crate::dispatch::channel;
use crate::state::Stores;
use crate::web::server::AppState;

/// Push surface towards the UI: one SSE stream multiplexing every store's
/// notifications under its channel name. A new subscriber immediately gets
/// the current value of each store that has one.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Server-sent event stream of store updates", content_type = "text/event-stream")
    ),
    tag = "events"
)]
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = store_updates(&state.stores)
        .map(|(name, payload)| Ok(Event::default().event(name).data(payload.to_string())));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Merged stream of (channel name, payload) pairs, one entry per store
/// notification. Unset stores emit nothing until their first snapshot lands;
/// the recording store always has a value and emits immediately.
pub(crate) fn store_updates(
    stores: &Stores,
) -> impl Stream<Item = (&'static str, serde_json::Value)> {
    let airplane = WatchStream::new(stores.airplane.watch())
        .filter_map(|slot| slot.into_value())
        .filter_map(|snap| json_payload(channel::AIRPLANE_STATE, &snap));
    let environment = WatchStream::new(stores.environment.watch())
        .filter_map(|slot| slot.into_value())
        .filter_map(|snap| json_payload(channel::ENVIRONMENT_STATE, &snap));
    let simulator = WatchStream::new(stores.simulator.watch())
        .filter_map(|slot| slot.into_value())
        .filter_map(|snap| json_payload(channel::SIMULATOR_STATE, &snap));
    let connectivity = WatchStream::new(stores.connectivity.watch())
        .filter_map(|slot| slot.into_value())
        .filter_map(|connected| json_payload(channel::SIM_STATUS, &connected));
    let recording = WatchStream::new(stores.recording.watch())
        .filter_map(|status| json_payload(channel::RECORDING_STATE, &status));

    airplane
        .merge(environment)
        .merge(simulator)
        .merge(connectivity)
        .merge(recording)
}

fn json_payload<T: Serialize>(
    name: &'static str,
    payload: &T,
) -> Option<(&'static str, serde_json::Value)> {
    match serde_json::to_value(payload) {
        Ok(value) => Some((name, value)),
        Err(e) => {
            log::warn!("failed to serialize {} event: {}", name, e);
            None
        }
    }
}
