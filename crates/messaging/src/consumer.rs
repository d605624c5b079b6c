//! Consumer contract and the in-memory consumer loop.

use async_trait::async_trait;

use crate::bridge::ExternalEventBridge;
use crate::broker::InMemoryBroker;
use crate::config::BrokerConfig;
use crate::error::MessagingError;

/// Drains inbound broker messages into the bridge.
#[async_trait]
pub trait Consumer: Send + Sync {
    /// Opens the broker connection and binds the configured topics.
    async fn start(&self) -> Result<(), MessagingError>;

    /// Processes pending messages.
    async fn consume(&self) -> Result<(), MessagingError>;

    /// Closes the broker connection.
    async fn stop(&self) -> Result<(), MessagingError>;
}

/// Consumer over the in-memory broker; `consume` drains everything pending.
pub struct InMemoryConsumer {
    broker: InMemoryBroker,
    bridge: ExternalEventBridge,
    config: BrokerConfig,
}

impl InMemoryConsumer {
    pub fn new(broker: InMemoryBroker, bridge: ExternalEventBridge, config: BrokerConfig) -> Self {
        Self {
            broker,
            bridge,
            config,
        }
    }
}

#[async_trait]
impl Consumer for InMemoryConsumer {
    async fn start(&self) -> Result<(), MessagingError> {
        tracing::info!(
            exchange = %self.config.exchange,
            queue = %self.config.queue,
            topics = ?self.config.consuming_topics,
            "consumer started"
        );
        Ok(())
    }

    async fn consume(&self) -> Result<(), MessagingError> {
        while let Some(message) = self.broker.next_inbound() {
            if !self.config.consumes(&message.routing_key) {
                tracing::debug!(
                    routing_key = %message.routing_key,
                    "routing key not bound to this queue, skipping"
                );
                continue;
            }
            if let Err(error) = self
                .bridge
                .on_message(&message.routing_key, message.payload)
                .await
            {
                tracing::error!(
                    routing_key = %message.routing_key,
                    %error,
                    "failed to process inbound message"
                );
            }
        }
        Ok(())
    }

    async fn stop(&self) -> Result<(), MessagingError> {
        tracing::info!(queue = %self.config.queue, "consumer stopped");
        Ok(())
    }
}
