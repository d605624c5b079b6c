//! In-memory broker implementing both sides of the wire.
//!
//! Outbound, it is an [`EventProducer`] that records what the service
//! publishes. Inbound, it holds a queue of injected messages for the
//! consumer to drain. One instance stands in for the real broker in tests.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::Event;
use service::{EventProducer, ProducerError};

/// An inbound message as delivered by the broker: routing key plus raw body.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub routing_key: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Default)]
struct BrokerState {
    started: bool,
    published: Vec<(String, serde_json::Value)>,
    inbound: VecDeque<InboundMessage>,
    fail_on_publish: bool,
}

/// In-memory broker for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<RwLock<BrokerState>>,
}

impl InMemoryBroker {
    /// Creates a new stopped broker with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the broker to reject publishes.
    pub fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().unwrap().fail_on_publish = fail;
    }

    /// Returns every message published so far, in order.
    pub fn published(&self) -> Vec<(String, serde_json::Value)> {
        self.state.read().unwrap().published.clone()
    }

    /// Returns the topics published so far, in order.
    pub fn published_topics(&self) -> Vec<String> {
        self.state
            .read()
            .unwrap()
            .published
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    /// Enqueues an inbound message, as if delivered by the broker.
    pub fn inject(&self, routing_key: &str, payload: serde_json::Value) {
        self.state.write().unwrap().inbound.push_back(InboundMessage {
            routing_key: routing_key.to_string(),
            payload,
        });
    }

    /// Dequeues the next inbound message, if any.
    pub fn next_inbound(&self) -> Option<InboundMessage> {
        self.state.write().unwrap().inbound.pop_front()
    }

    /// Returns true between `start` and `stop`.
    pub fn is_started(&self) -> bool {
        self.state.read().unwrap().started
    }
}

#[async_trait]
impl EventProducer for InMemoryBroker {
    async fn start(&self) -> Result<(), ProducerError> {
        self.state.write().unwrap().started = true;
        Ok(())
    }

    async fn stop(&self) -> Result<(), ProducerError> {
        self.state.write().unwrap().started = false;
        Ok(())
    }

    async fn publish(&self, event: &Event, topic: &str) -> Result<(), ProducerError> {
        let mut state = self.state.write().unwrap();
        if !state.started {
            return Err(ProducerError::Connection("broker not started".to_string()));
        }
        if state.fail_on_publish {
            return Err(ProducerError::Publish {
                topic: topic.to_string(),
                reason: "publish disabled".to_string(),
            });
        }
        let payload = serde_json::to_value(event).map_err(|err| ProducerError::Publish {
            topic: topic.to_string(),
            reason: err.to_string(),
        })?;
        state.published.push((topic.to_string(), payload));
        tracing::debug!(topic, "published event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{MessageId, UserId};
    use domain::UserDeletedData;

    fn deleted_event() -> Event {
        Event::UserDeleted(UserDeletedData {
            event_id: MessageId::new(),
            user_id: UserId::new(),
        })
    }

    #[tokio::test]
    async fn test_publish_requires_start() {
        let broker = InMemoryBroker::new();
        let result = broker.publish(&deleted_event(), "user.deleted").await;
        assert!(matches!(result, Err(ProducerError::Connection(_))));

        broker.start().await.unwrap();
        broker.publish(&deleted_event(), "user.deleted").await.unwrap();
        assert_eq!(broker.published_topics(), vec!["user.deleted"]);
    }

    #[tokio::test]
    async fn test_fail_on_publish() {
        let broker = InMemoryBroker::new();
        broker.start().await.unwrap();
        broker.set_fail_on_publish(true);

        let result = broker.publish(&deleted_event(), "user.deleted").await;
        assert!(matches!(result, Err(ProducerError::Publish { .. })));
        assert!(broker.published().is_empty());
    }

    #[test]
    fn test_inbound_queue_is_fifo() {
        let broker = InMemoryBroker::new();
        broker.inject("a", serde_json::json!({"n": 1}));
        broker.inject("b", serde_json::json!({"n": 2}));

        assert_eq!(broker.next_inbound().unwrap().routing_key, "a");
        assert_eq!(broker.next_inbound().unwrap().routing_key, "b");
        assert!(broker.next_inbound().is_none());
    }
}
