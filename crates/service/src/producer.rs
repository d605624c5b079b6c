//! Outbound producer contract.
//!
//! The broker itself is an external collaborator; event handlers only see
//! this interface. Implementations live outside the core (see the
//! `messaging` crate).

use async_trait::async_trait;
use domain::Event;

use crate::error::ProducerError;

/// Publishes events to an external broker under a topic string.
#[async_trait]
pub trait EventProducer: Send + Sync {
    /// Establishes the broker connection.
    async fn start(&self) -> Result<(), ProducerError>;

    /// Closes the broker connection.
    async fn stop(&self) -> Result<(), ProducerError>;

    /// Publishes the event, serialized to its full field set, under `topic`.
    async fn publish(&self, event: &Event, topic: &str) -> Result<(), ProducerError>;
}
