use serde::{Deserialize, Serialize};

use super::error::SnapshotError;

/// Lighting category derived by the simulator from the world clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Dawn,
    Day,
    Dusk,
    Night,
}

/// Latest simulated-world environment sample: ambient conditions plus the
/// world clock, local and zulu. Times of day are seconds since midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EnvironmentState {
    pub ambient_temperature_c: f64,
    pub visibility_m: f64,
    pub wind_direction_deg: f64,
    pub wind_velocity_kt: f64,
    pub sea_level_pressure_mb: f64,
    pub local_day: u32,
    pub local_month: u32,
    pub local_year: i32,
    pub local_time_s: f64,
    pub local_day_of_week: u32,
    pub zulu_day: u32,
    pub zulu_month: u32,
    pub zulu_year: i32,
    pub zulu_time_s: f64,
    pub zulu_day_of_week: u32,
    pub sunrise_time_s: f64,
    pub sunset_time_s: f64,
    pub time_of_day: TimeOfDay,
}

const SECONDS_PER_DAY: f64 = 86_400.0;

impl EnvironmentState {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let fields = [
            ("ambient_temperature_c", self.ambient_temperature_c),
            ("visibility_m", self.visibility_m),
            ("wind_direction_deg", self.wind_direction_deg),
            ("wind_velocity_kt", self.wind_velocity_kt),
            ("sea_level_pressure_mb", self.sea_level_pressure_mb),
            ("local_time_s", self.local_time_s),
            ("zulu_time_s", self.zulu_time_s),
            ("sunrise_time_s", self.sunrise_time_s),
            ("sunset_time_s", self.sunset_time_s),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SnapshotError::NonFinite(name));
            }
        }
        range_check("visibility_m", self.visibility_m, 0.0, f64::MAX)?;
        range_check("wind_direction_deg", self.wind_direction_deg, 0.0, 360.0)?;
        range_check("wind_velocity_kt", self.wind_velocity_kt, 0.0, f64::MAX)?;
        range_check("local_time_s", self.local_time_s, 0.0, SECONDS_PER_DAY)?;
        range_check("zulu_time_s", self.zulu_time_s, 0.0, SECONDS_PER_DAY)?;
        for (name, value, min, max) in [
            ("local_month", self.local_month, 1, 12),
            ("zulu_month", self.zulu_month, 1, 12),
            ("local_day", self.local_day, 1, 31),
            ("zulu_day", self.zulu_day, 1, 31),
            ("local_day_of_week", self.local_day_of_week, 0, 6),
            ("zulu_day_of_week", self.zulu_day_of_week, 0, 6),
        ] {
            if value < min || value > max {
                return Err(SnapshotError::OutOfRange {
                    field: name,
                    value: value as f64,
                });
            }
        }
        Ok(())
    }
}

fn range_check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SnapshotError> {
    if value < min || value > max {
        return Err(SnapshotError::OutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvironmentState {
        EnvironmentState {
            ambient_temperature_c: 14.5,
            visibility_m: 9999.0,
            wind_direction_deg: 240.0,
            wind_velocity_kt: 8.0,
            sea_level_pressure_mb: 1013.2,
            local_day: 26,
            local_month: 8,
            local_year: 2026,
            local_time_s: 47_100.0,
            local_day_of_week: 2,
            zulu_day: 26,
            zulu_month: 8,
            zulu_year: 2026,
            zulu_time_s: 39_900.0,
            zulu_day_of_week: 2,
            sunrise_time_s: 23_160.0,
            sunset_time_s: 73_440.0,
            time_of_day: TimeOfDay::Day,
        }
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn month_zero_rejected() {
        let mut state = sample();
        state.zulu_month = 0;
        assert_eq!(
            state.validate(),
            Err(SnapshotError::OutOfRange {
                field: "zulu_month",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_visibility_rejected() {
        let mut state = sample();
        state.visibility_m = -1.0;
        assert!(state.validate().is_err());
    }

    #[test]
    fn time_of_day_serializes_snake_case() {
        let json = serde_json::to_string(&TimeOfDay::Dawn).unwrap();
        assert_eq!(json, "\"dawn\"");
    }
}
