use std::sync::Arc;

use tokio::sync::mpsc;

use crate::model::{AirplaneState, EnvironmentState, SimulatorState};
use crate::state::Stores;

/// Channel identifiers shared with the UI: each store's notifications are
/// published under one of these names on the event stream.
pub mod channel {
    pub const AIRPLANE_STATE: &str = "airplane::state";
    pub const ENVIRONMENT_STATE: &str = "environment::state";
    pub const SIMULATOR_STATE: &str = "simulator::state";
    pub const SIM_STATUS: &str = "global::sim-status";
    pub const RECORDING_STATE: &str = "recording::state";
}

/// One-shot bundle of snapshots fetched right after the link comes up.
/// Applied through the seed path, so it loses to any push that got there
/// first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialSnapshot {
    pub airplane: Option<AirplaneState>,
    pub environment: Option<EnvironmentState>,
    pub simulator: Option<SimulatorState>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Airplane(AirplaneState),
    Environment(EnvironmentState),
    Simulator(SimulatorState),
    Connectivity(bool),
    Seed(InitialSnapshot),
}

/// Single consumer of the event channel. Validates every snapshot and applies
/// it to the matching holder; invalid payloads are dropped with a warning
/// instead of being stored verbatim.
pub struct Dispatcher {
    stores: Arc<Stores>,
    events: mpsc::Receiver<Event>,
}

impl Dispatcher {
    pub fn new(stores: Arc<Stores>, events: mpsc::Receiver<Event>) -> Self {
        Dispatcher { stores, events }
    }

    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            self.apply(event);
        }
        log::debug!("event channel closed, dispatcher exiting");
    }

    fn apply(&self, event: Event) {
        match event {
            Event::Airplane(state) => match state.validate() {
                Ok(()) => self.stores.airplane.replace(state),
                Err(e) => log::warn!("dropping airplane snapshot: {}", e),
            },
            Event::Environment(state) => match state.validate() {
                Ok(()) => self.stores.environment.replace(state),
                Err(e) => log::warn!("dropping environment snapshot: {}", e),
            },
            Event::Simulator(state) => match state.validate() {
                Ok(()) => self.stores.simulator.replace(state),
                Err(e) => log::warn!("dropping simulator snapshot: {}", e),
            },
            Event::Connectivity(connected) => self.stores.connectivity.replace(connected),
            Event::Seed(initial) => self.apply_seed(initial),
        }
    }

    fn apply_seed(&self, initial: InitialSnapshot) {
        if let Some(state) = initial.airplane {
            match state.validate() {
                Ok(()) => {
                    if !self.stores.airplane.seed(state) {
                        log::debug!("airplane seed ignored, push already landed");
                    }
                }
                Err(e) => log::warn!("dropping airplane seed: {}", e),
            }
        }
        if let Some(state) = initial.environment {
            match state.validate() {
                Ok(()) => {
                    if !self.stores.environment.seed(state) {
                        log::debug!("environment seed ignored, push already landed");
                    }
                }
                Err(e) => log::warn!("dropping environment seed: {}", e),
            }
        }
        if let Some(state) = initial.simulator {
            match state.validate() {
                Ok(()) => {
                    if !self.stores.simulator.seed(state) {
                        log::debug!("simulator seed ignored, push already landed");
                    }
                }
                Err(e) => log::warn!("dropping simulator seed: {}", e),
            }
        }
    }
}
