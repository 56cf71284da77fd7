use std::time::Duration;

use crate::model::{AirplaneState, EnvironmentState, SimulatorState};

use super::holder::StateHolder;
use super::recording::RecordingControl;

/// Composition root for all state holders. Built once at startup and shared
/// as an `Arc` with the dispatcher and the web layer; the holders are
/// independent of one another.
#[derive(Debug)]
pub struct Stores {
    pub airplane: StateHolder<AirplaneState>,
    pub environment: StateHolder<EnvironmentState>,
    pub simulator: StateHolder<SimulatorState>,
    pub connectivity: StateHolder<bool>,
    pub recording: RecordingControl,
}

impl Stores {
    pub fn new(recording_stop_delay: Duration) -> Self {
        Stores {
            airplane: StateHolder::new(),
            environment: StateHolder::new(),
            simulator: StateHolder::new(),
            connectivity: StateHolder::new(),
            recording: RecordingControl::new(recording_stop_delay),
        }
    }
}
