//! Handlers for messages arriving from other services.

use std::sync::Arc;

use async_trait::async_trait;
use common::UserId;
use domain::{Command, CredentialsStatus, Message, UpdateCredentialsStatus};
use serde::Deserialize;
use service::BusFactory;

use crate::error::MessagingError;

/// The auth service created (or failed to create) credentials for a user.
pub const USER_CREDENTIALS_CREATED: &str = "user.credentials.created";

/// Handles one inbound payload for a fixed routing key.
#[async_trait]
pub trait ExternalEventHandler: Send + Sync {
    async fn handle(&self, payload: serde_json::Value) -> Result<(), MessagingError>;
}

#[derive(Debug, Deserialize)]
struct CredentialsCreatedPayload {
    user_id: UserId,
    status: CredentialsStatus,
}

/// Translates the auth service's credentials outcome into an
/// `UpdateCredentialsStatus` command on a fresh bus.
pub struct CredentialsCreatedHandler {
    bus_factory: Arc<dyn BusFactory>,
}

impl CredentialsCreatedHandler {
    pub fn new(bus_factory: Arc<dyn BusFactory>) -> Self {
        Self { bus_factory }
    }
}

#[async_trait]
impl ExternalEventHandler for CredentialsCreatedHandler {
    async fn handle(&self, payload: serde_json::Value) -> Result<(), MessagingError> {
        let decoded: CredentialsCreatedPayload = serde_json::from_value(payload)?;
        tracing::info!(
            user_id = %decoded.user_id,
            status = %decoded.status,
            "received credentials outcome"
        );

        let command = UpdateCredentialsStatus::new(decoded.user_id, decoded.status);
        let mut bus = self.bus_factory.create_bus();
        bus.handle(Message::Command(Command::UpdateCredentialsStatus(command)))
            .await?;
        Ok(())
    }
}
