use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    Idle,
    Recording,
    Stopping,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct RecordingStatus {
    pub state: RecordingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl RecordingStatus {
    fn idle() -> Self {
        RecordingStatus {
            state: RecordingState::Idle,
            session_id: None,
            started_at: None,
        }
    }
}

/// Local recording lifecycle: idle -> recording -> stopping -> idle.
///
/// Transitions are driven by UI actions only. `stop` flips to stopping
/// immediately and settles back to idle after a fixed delay; there is no
/// acknowledgment from the recorder backend yet, the delay exists purely as
/// UI feedback.
#[derive(Debug, Clone)]
pub struct RecordingControl {
    tx: Arc<watch::Sender<RecordingStatus>>,
    stop_delay: Duration,
}

impl RecordingControl {
    pub fn new(stop_delay: Duration) -> Self {
        let (tx, _) = watch::channel(RecordingStatus::idle());
        RecordingControl {
            tx: Arc::new(tx),
            stop_delay,
        }
    }

    pub fn status(&self) -> RecordingStatus {
        self.tx.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<RecordingStatus> {
        self.tx.subscribe()
    }

    /// Starts a new recording session, from any state.
    // TODO: forward the start to the sim link once recorder writes are wired up.
    pub fn start(&self) -> RecordingStatus {
        let status = RecordingStatus {
            state: RecordingState::Recording,
            session_id: Some(Uuid::new_v4()),
            started_at: Some(Utc::now()),
        };
        self.tx.send_replace(status.clone());
        status
    }

    /// Flips to stopping immediately, then settles to idle after the
    /// configured delay unless a new session started in the meantime.
    // TODO: forward the stop to the sim link once recorder writes are wired up.
    pub fn stop(&self) -> RecordingStatus {
        self.tx.send_modify(|s| {
            s.state = RecordingState::Stopping;
        });
        let status = self.tx.borrow().clone();

        let tx = self.tx.clone();
        let delay = self.stop_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send_modify(|s| {
                if s.state == RecordingState::Stopping {
                    *s = RecordingStatus::idle();
                }
            });
        });

        status
    }
}
