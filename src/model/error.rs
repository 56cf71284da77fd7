use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("non-finite value in field '{0}'")]
    NonFinite(&'static str),
    #[error("field '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
