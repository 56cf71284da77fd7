use serde::{Deserialize, Serialize};

use super::error::SnapshotError;

/// Coarse simulator run state: run/pause/crash flags, active view, loaded
/// content and the rate/realism settings in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SimulatorState {
    pub sim_running: bool,
    pub paused: bool,
    pub crashed: bool,
    pub view_mode: i32,
    pub aircraft_loaded: String,
    pub flight_loaded: String,
    pub flight_plan: String,
    pub simulation_rate: f64,
    pub realism_pct: f64,
    pub on_ground: bool,
    pub on_runway: bool,
}

impl SimulatorState {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (name, value) in [
            ("simulation_rate", self.simulation_rate),
            ("realism_pct", self.realism_pct),
        ] {
            if !value.is_finite() {
                return Err(SnapshotError::NonFinite(name));
            }
        }
        if self.simulation_rate < 0.0 {
            return Err(SnapshotError::OutOfRange {
                field: "simulation_rate",
                value: self.simulation_rate,
            });
        }
        if !(0.0..=100.0).contains(&self.realism_pct) {
            return Err(SnapshotError::OutOfRange {
                field: "realism_pct",
                value: self.realism_pct,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulatorState {
        SimulatorState {
            sim_running: true,
            paused: false,
            crashed: false,
            view_mode: 2,
            aircraft_loaded: "Asobo C172".to_string(),
            flight_loaded: "LSZH circuit".to_string(),
            flight_plan: "LSZH-LSZH".to_string(),
            simulation_rate: 1.0,
            realism_pct: 100.0,
            on_ground: false,
            on_runway: false,
        }
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn negative_rate_rejected() {
        let mut state = sample();
        state.simulation_rate = -1.0;
        assert!(state.validate().is_err());
    }
}
