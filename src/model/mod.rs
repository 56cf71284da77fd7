mod airplane;
mod environment;
mod error;
mod simulator;

pub use airplane::AirplaneState;
pub use environment::{EnvironmentState, TimeOfDay};
pub use error::SnapshotError;
pub use simulator::SimulatorState;
