mod client;
mod error;
mod replay;
mod supervisor;

pub use client::{SimClient, SimConnection, SimMessage};
pub use error::LinkError;
pub use replay::ReplayClient;
pub use supervisor::LinkSupervisor;
