use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("replay frame {0}: {1}")]
    Frame(usize, serde_json::Error),
    #[error("replay file contains no frames")]
    EmptyReplay,
}
