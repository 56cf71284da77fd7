use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::dispatch::InitialSnapshot;
use crate::model::{AirplaneState, EnvironmentState, SimulatorState};

use super::client::{SimClient, SimConnection, SimMessage};
use super::error::LinkError;

/// One line of a replay file. Every entity is optional so a frame can carry
/// any subset of snapshots, the way a live simulator pushes them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayFrame {
    pub airplane: Option<AirplaneState>,
    pub environment: Option<EnvironmentState>,
    pub simulator: Option<SimulatorState>,
}

/// Plays a JSONL file of snapshot frames at a fixed cadence, standing in for
/// the live simulator transport. When the file runs out the stream closes and
/// the supervisor's retry loop starts the replay over.
pub struct ReplayClient {
    path: PathBuf,
    interval: Duration,
}

impl ReplayClient {
    pub fn new(path: PathBuf, interval: Duration) -> Self {
        ReplayClient { path, interval }
    }
}

impl SimClient for ReplayClient {
    async fn connect(&mut self) -> Result<SimConnection, LinkError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let mut frames = parse_frames(&raw)?;

        // parse_frames guarantees at least one frame. The first frame serves
        // as the request/response snapshot only; the feeder starts at the
        // second so subscribers never see the same data twice.
        let first = frames.remove(0);
        let initial = InitialSnapshot {
            airplane: first.airplane,
            environment: first.environment,
            simulator: first.simulator,
        };

        let (tx, rx) = mpsc::channel(16);
        let interval = self.interval;
        tokio::spawn(async move {
            for frame in frames {
                sleep(interval).await;
                for msg in frame_messages(frame) {
                    if tx.send(msg).await.is_err() {
                        return;
                    }
                }
                if tx.send(SimMessage::Heartbeat).await.is_err() {
                    return;
                }
            }
            let _ = tx.send(SimMessage::Quit).await;
        });

        Ok(SimConnection { initial, stream: rx })
    }
}

fn frame_messages(frame: ReplayFrame) -> Vec<SimMessage> {
    let mut messages = Vec::new();
    if let Some(state) = frame.airplane {
        messages.push(SimMessage::Airplane(state));
    }
    if let Some(state) = frame.environment {
        messages.push(SimMessage::Environment(state));
    }
    if let Some(state) = frame.simulator {
        messages.push(SimMessage::Simulator(state));
    }
    messages
}

pub fn parse_frames(raw: &str) -> Result<Vec<ReplayFrame>, LinkError> {
    let frames = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| serde_json::from_str(line).map_err(|e| LinkError::Frame(i + 1, e)))
        .collect::<Result<Vec<ReplayFrame>, _>>()?;

    if frames.is_empty() {
        return Err(LinkError::EmptyReplay);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: &str = r#"{"airplane":{"title":"C172","latitude":47.0,"longitude":8.0,"altitude_ft":1500.0,"heading_true_deg":90.0,"heading_magnetic_deg":88.0,"bank_deg":0.0,"pitch_deg":1.0,"vertical_speed_fpm":0.0,"ground_velocity_kt":95.0,"airspeed_indicated_kt":92.0,"airspeed_true_kt":94.0,"angle_of_attack_deg":3.5}}"#;

    #[test]
    fn parses_one_frame_per_line() {
        let raw = format!("{FRAME}\n\n{FRAME}\n");
        let frames = parse_frames(&raw).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].airplane.as_ref().unwrap().title, "C172");
        assert!(frames[0].environment.is_none());
    }

    #[test]
    fn reports_line_number_on_bad_frame() {
        let raw = format!("{FRAME}\nnot json\n");
        match parse_frames(&raw) {
            Err(LinkError::Frame(line, _)) => assert_eq!(line, 2),
            other => panic!("expected frame error, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(parse_frames("\n\n"), Err(LinkError::EmptyReplay)));
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_frame_is_not_replayed_as_a_push() {
        let second = FRAME.replace("47.0", "48.0");
        let dir = std::env::temp_dir().join(format!("simdeck-replay-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("flight.jsonl");
        tokio::fs::write(&path, format!("{FRAME}\n{second}\n"))
            .await
            .unwrap();

        let mut client = ReplayClient::new(path, Duration::from_millis(100));
        let mut conn = client.connect().await.unwrap();
        assert_eq!(conn.initial.airplane.as_ref().unwrap().latitude, 47.0);

        let mut messages = Vec::new();
        while let Some(msg) = conn.stream.recv().await {
            messages.push(msg);
        }
        // Only the second frame is pushed; the first went out as the seed.
        assert_eq!(messages.len(), 3);
        match &messages[0] {
            SimMessage::Airplane(state) => assert_eq!(state.latitude, 48.0),
            other => panic!("expected airplane push, got {:?}", other),
        }
        assert_eq!(messages[1], SimMessage::Heartbeat);
        assert_eq!(messages[2], SimMessage::Quit);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
