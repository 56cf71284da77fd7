use std::future::Future;

use tokio::sync::mpsc;

use crate::dispatch::InitialSnapshot;
use crate::model::{AirplaneState, EnvironmentState, SimulatorState};

use super::error::LinkError;

/// One message from a connected simulator. Heartbeats carry no data but
/// keep the supervisor's liveness timer fed; `Quit` is the simulator's
/// orderly goodbye.
#[derive(Debug, Clone, PartialEq)]
pub enum SimMessage {
    Airplane(AirplaneState),
    Environment(EnvironmentState),
    Simulator(SimulatorState),
    Heartbeat,
    Quit,
}

/// An established link: the initial request/response snapshot plus the
/// push stream that follows it.
pub struct SimConnection {
    pub initial: InitialSnapshot,
    pub stream: mpsc::Receiver<SimMessage>,
}

/// Transport seam towards the simulator. The supervisor only ever asks for
/// a fresh connection; everything after that arrives on the stream.
pub trait SimClient: Send + 'static {
    fn connect(&mut self) -> impl Future<Output = Result<SimConnection, LinkError>> + Send;
}
