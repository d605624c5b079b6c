//! Bridge from inbound broker messages to external event handlers.
//!
//! Dispatch is keyed on the exact routing key. A message with no registered
//! handler is logged and dropped; it is not an error, since the queue may be
//! bound to topics this service does not yet act on.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::MessagingError;
use crate::handlers::ExternalEventHandler;

/// Routes inbound messages to the handler registered for their routing key.
#[derive(Default)]
pub struct ExternalEventBridge {
    handlers: HashMap<String, Arc<dyn ExternalEventHandler>>,
}

impl ExternalEventBridge {
    /// Creates an empty bridge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a routing key, replacing any previous one.
    pub fn register(
        mut self,
        routing_key: &str,
        handler: Arc<dyn ExternalEventHandler>,
    ) -> Self {
        self.handlers.insert(routing_key.to_string(), handler);
        self
    }

    /// Dispatches one inbound message.
    ///
    /// Unknown routing keys are dropped with a warning. Handler failures
    /// propagate so the consumer loop can log (or nack) them.
    #[tracing::instrument(skip(self, payload))]
    pub async fn on_message(
        &self,
        routing_key: &str,
        payload: serde_json::Value,
    ) -> Result<(), MessagingError> {
        metrics::counter!("external_messages_total", "routing_key" => routing_key.to_string())
            .increment(1);

        match self.handlers.get(routing_key) {
            Some(handler) => handler.handle(payload).await,
            None => {
                tracing::warn!(routing_key, "no handler for routing key, dropping message");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingHandler {
        seen: RwLock<Vec<serde_json::Value>>,
    }

    #[async_trait]
    impl ExternalEventHandler for RecordingHandler {
        async fn handle(&self, payload: serde_json::Value) -> Result<(), MessagingError> {
            self.seen.write().unwrap().push(payload);
            Ok(())
        }
    }

    #[tokio::test]
    async fn dispatches_on_exact_routing_key() {
        let handler = Arc::new(RecordingHandler::default());
        let bridge = ExternalEventBridge::new().register("user.credentials.created", handler.clone());

        bridge
            .on_message("user.credentials.created", serde_json::json!({"n": 1}))
            .await
            .unwrap();

        assert_eq!(handler.seen.read().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_routing_key_is_a_no_op() {
        let handler = Arc::new(RecordingHandler::default());
        let bridge = ExternalEventBridge::new().register("user.credentials.created", handler.clone());

        // A prefix match is not a match.
        bridge
            .on_message("user.credentials", serde_json::json!({}))
            .await
            .unwrap();
        bridge
            .on_message("user.credentials.created.v2", serde_json::json!({}))
            .await
            .unwrap();

        assert!(handler.seen.read().unwrap().is_empty());
    }
}
