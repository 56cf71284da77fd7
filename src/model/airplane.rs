use serde::{Deserialize, Serialize};

use super::error::SnapshotError;

/// Latest airplane kinematics and attitude, replaced wholesale on every push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AirplaneState {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: f64,
    pub heading_true_deg: f64,
    pub heading_magnetic_deg: f64,
    pub bank_deg: f64,
    pub pitch_deg: f64,
    pub vertical_speed_fpm: f64,
    pub ground_velocity_kt: f64,
    pub airspeed_indicated_kt: f64,
    pub airspeed_true_kt: f64,
    pub angle_of_attack_deg: f64,
}

impl AirplaneState {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let fields = [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("altitude_ft", self.altitude_ft),
            ("heading_true_deg", self.heading_true_deg),
            ("heading_magnetic_deg", self.heading_magnetic_deg),
            ("bank_deg", self.bank_deg),
            ("pitch_deg", self.pitch_deg),
            ("vertical_speed_fpm", self.vertical_speed_fpm),
            ("ground_velocity_kt", self.ground_velocity_kt),
            ("airspeed_indicated_kt", self.airspeed_indicated_kt),
            ("airspeed_true_kt", self.airspeed_true_kt),
            ("angle_of_attack_deg", self.angle_of_attack_deg),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SnapshotError::NonFinite(name));
            }
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SnapshotError::OutOfRange {
                field: "latitude",
                value: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SnapshotError::OutOfRange {
                field: "longitude",
                value: self.longitude,
            });
        }
        Ok(())
    }
}
