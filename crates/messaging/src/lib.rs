//! Broker adapters for the user service: the outbound producer side, the
//! inbound consumer side, and the bridge that turns external events into
//! commands on the message bus.

pub mod bridge;
pub mod broker;
pub mod config;
pub mod consumer;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use service::BusFactory;

pub use bridge::ExternalEventBridge;
pub use broker::{InMemoryBroker, InboundMessage};
pub use config::BrokerConfig;
pub use consumer::{Consumer, InMemoryConsumer};
pub use error::MessagingError;
pub use handlers::{CredentialsCreatedHandler, ExternalEventHandler, USER_CREDENTIALS_CREATED};

/// Builds the service's bridge: one handler per consumed routing key.
pub fn default_bridge(bus_factory: Arc<dyn BusFactory>) -> ExternalEventBridge {
    ExternalEventBridge::new().register(
        USER_CREDENTIALS_CREATED,
        Arc::new(CredentialsCreatedHandler::new(bus_factory)),
    )
}
