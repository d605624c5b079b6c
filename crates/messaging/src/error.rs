//! Error types for broker adapters and the external event bridge.

use service::ServiceError;
use thiserror::Error;

/// Errors raised while consuming or bridging external messages.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// The inbound payload did not match the handler's expected shape.
    #[error("failed to decode inbound payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The synthesized command failed inside the service layer.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The broker connection is unavailable or was never started.
    #[error("broker error: {0}")]
    Broker(String),
}
