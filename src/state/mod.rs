mod holder;
mod recording;
mod stores;

pub use holder::{Slot, StateHolder};
pub use recording::{RecordingControl, RecordingState, RecordingStatus};
pub use stores::Stores;
