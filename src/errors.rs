use thiserror::Error;

/// Error type for failures at the record boundary. The grid workflow itself
/// degrades silently (see the service diagnostics) and never raises.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Raised by [`crate::export::GridExporter`] implementors that write to
    /// disk; the in-memory core never produces it.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
