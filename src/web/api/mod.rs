pub mod error;
pub mod events;
pub mod recording;
pub mod state;
