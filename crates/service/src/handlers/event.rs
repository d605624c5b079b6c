//! Event handlers.

use std::sync::Arc;

use async_trait::async_trait;
use domain::Event;

use crate::error::ServiceError;
use crate::producer::EventProducer;

/// Reacts to one event type.
///
/// Failures are isolated by the bus: logged and counted, never propagated
/// to sibling handlers or the rest of the queue.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &Event) -> Result<(), ServiceError>;
}

/// Publishes an event to the outbound broker under a fixed topic.
///
/// The topic is assigned per (event type, handler) pairing when the registry
/// is built, never derived from the event payload.
pub struct PublishEventHandler {
    producer: Arc<dyn EventProducer>,
    topic: &'static str,
}

impl PublishEventHandler {
    /// Creates a handler bound to one producer and topic.
    pub fn new(producer: Arc<dyn EventProducer>, topic: &'static str) -> Self {
        Self { producer, topic }
    }
}

#[async_trait]
impl EventHandler for PublishEventHandler {
    async fn handle(&self, event: &Event) -> Result<(), ServiceError> {
        tracing::debug!(
            event = event.event_type(),
            event_id = %event.event_id(),
            topic = self.topic,
            "publishing event"
        );
        self.producer.publish(event, self.topic).await?;
        Ok(())
    }
}
