use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

use crate::dispatch::Event;

use super::client::{SimClient, SimMessage};

/// Keeps the simulator link alive: offline -> connecting -> online, retrying
/// on a fixed interval while offline and treating a silent stream as a lost
/// connection. Emits connectivity flips, the initial seed and every pushed
/// snapshot onto the dispatch channel. Runs for the life of the process.
pub struct LinkSupervisor<C> {
    client: C,
    events: mpsc::Sender<Event>,
    retry_interval: Duration,
    heartbeat_timeout: Duration,
}

impl<C: SimClient> LinkSupervisor<C> {
    pub fn new(
        client: C,
        events: mpsc::Sender<Event>,
        retry_interval: Duration,
        heartbeat_timeout: Duration,
    ) -> Self {
        LinkSupervisor {
            client,
            events,
            retry_interval,
            heartbeat_timeout,
        }
    }

    pub async fn run(mut self) {
        loop {
            if self.events.is_closed() {
                return;
            }
            log::debug!("sim link offline, attempting to connect");
            match self.client.connect().await {
                Err(e) => {
                    log::debug!("sim link connection failed: {}", e);
                }
                Ok(conn) => {
                    log::info!("sim link established");
                    if self.send(Event::Connectivity(true)).await.is_err() {
                        return;
                    }
                    // Seed goes out before any forwarded push from this
                    // connection; the holder's seed guard covers the rest.
                    if self.send(Event::Seed(conn.initial)).await.is_err() {
                        return;
                    }
                    self.consume(conn.stream).await;
                    log::info!("sim link lost");
                    if self.send(Event::Connectivity(false)).await.is_err() {
                        return;
                    }
                }
            }
            sleep(self.retry_interval).await;
        }
    }

    async fn consume(&self, mut stream: mpsc::Receiver<SimMessage>) {
        loop {
            let message = match timeout(self.heartbeat_timeout, stream.recv()).await {
                Err(_) => {
                    log::debug!("missed heartbeat, treating sim link as disconnected");
                    return;
                }
                Ok(None) => return,
                Ok(Some(message)) => message,
            };
            let event = match message {
                SimMessage::Heartbeat => continue,
                SimMessage::Quit => {
                    log::debug!("sim link quit message received");
                    return;
                }
                SimMessage::Airplane(state) => Event::Airplane(state),
                SimMessage::Environment(state) => Event::Environment(state),
                SimMessage::Simulator(state) => Event::Simulator(state),
            };
            if self.send(event).await.is_err() {
                return;
            }
        }
    }

    async fn send(&self, event: Event) -> Result<(), ()> {
        self.events.send(event).await.map_err(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::InitialSnapshot;
    use crate::link::{LinkError, SimConnection};
    use crate::model::AirplaneState;

    const RETRY: Duration = Duration::from_secs(5);
    const HEARTBEAT: Duration = Duration::from_secs(2);

    fn airplane(lat: f64) -> AirplaneState {
        AirplaneState {
            title: "test".to_string(),
            latitude: lat,
            longitude: 8.5,
            altitude_ft: 1500.0,
            heading_true_deg: 90.0,
            heading_magnetic_deg: 88.0,
            bank_deg: 0.0,
            pitch_deg: 0.0,
            vertical_speed_fpm: 0.0,
            ground_velocity_kt: 100.0,
            airspeed_indicated_kt: 100.0,
            airspeed_true_kt: 102.0,
            angle_of_attack_deg: 3.0,
        }
    }

    /// Connects once with a scripted message stream, then keeps failing.
    struct ScriptedClient {
        script: Option<Vec<SimMessage>>,
    }

    impl SimClient for ScriptedClient {
        async fn connect(&mut self) -> Result<SimConnection, LinkError> {
            let script = self.script.take().ok_or(LinkError::EmptyReplay)?;
            let (tx, rx) = mpsc::channel(16);
            tokio::spawn(async move {
                for msg in script {
                    if tx.send(msg).await.is_err() {
                        return;
                    }
                }
            });
            Ok(SimConnection {
                initial: InitialSnapshot {
                    airplane: Some(airplane(1.0)),
                    ..Default::default()
                },
                stream: rx,
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn emits_connectivity_seed_pushes_and_disconnect() {
        let client = ScriptedClient {
            script: Some(vec![
                SimMessage::Heartbeat,
                SimMessage::Airplane(airplane(2.0)),
                SimMessage::Quit,
            ]),
        };
        let (tx, mut rx) = mpsc::channel(16);
        tokio::spawn(LinkSupervisor::new(client, tx, RETRY, HEARTBEAT).run());

        assert_eq!(rx.recv().await, Some(Event::Connectivity(true)));
        assert_eq!(
            rx.recv().await,
            Some(Event::Seed(InitialSnapshot {
                airplane: Some(airplane(1.0)),
                ..Default::default()
            }))
        );
        assert_eq!(rx.recv().await, Some(Event::Airplane(airplane(2.0))));
        assert_eq!(rx.recv().await, Some(Event::Connectivity(false)));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_stream_counts_as_disconnect() {
        // Stream that never sends: the feeder holds the sender open forever.
        struct SilentClient {
            connected: bool,
        }
        impl SimClient for SilentClient {
            async fn connect(&mut self) -> Result<SimConnection, LinkError> {
                if self.connected {
                    return Err(LinkError::EmptyReplay);
                }
                self.connected = true;
                let (tx, rx) = mpsc::channel(1);
                tokio::spawn(async move {
                    let _tx = tx;
                    std::future::pending::<()>().await;
                });
                Ok(SimConnection {
                    initial: InitialSnapshot::default(),
                    stream: rx,
                })
            }
        }

        let (tx, mut rx) = mpsc::channel(16);
        tokio::spawn(LinkSupervisor::new(SilentClient { connected: false }, tx, RETRY, HEARTBEAT).run());

        assert_eq!(rx.recv().await, Some(Event::Connectivity(true)));
        assert_eq!(rx.recv().await, Some(Event::Seed(InitialSnapshot::default())));
        // Nothing arrives; the heartbeat timeout expires under the paused
        // clock and the link is declared down.
        assert_eq!(rx.recv().await, Some(Event::Connectivity(false)));
    }
}
