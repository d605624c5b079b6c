//! Wiring: builds the default registry and fresh bus instances.
//!
//! All collaborators are passed in explicitly; there are no process-wide
//! singletons.

use std::sync::Arc;

use domain::{CommandKind, EventKind};

use crate::bus::MessageBus;
use crate::handlers::{
    CreateUserHandler, DeleteUserHandler, PublishEventHandler, UpdateCredentialsStatusHandler,
    UpdateUserPhotoHandler,
};
use crate::memory::{InMemoryUserStore, InMemoryUserUnitOfWork};
use crate::producer::EventProducer;
use crate::registry::HandlerRegistry;
use crate::topics;
use crate::uow::UserUnitOfWork;

/// Builds the service's registry: every command handler, and one publishing
/// handler per event type with its fixed topic.
pub fn default_registry(producer: Arc<dyn EventProducer>) -> HandlerRegistry {
    HandlerRegistry::builder()
        .command(CommandKind::CreateUser, Arc::new(CreateUserHandler))
        .command(CommandKind::DeleteUser, Arc::new(DeleteUserHandler))
        .command(
            CommandKind::UpdateCredentialsStatus,
            Arc::new(UpdateCredentialsStatusHandler),
        )
        .command(CommandKind::UpdateUserPhoto, Arc::new(UpdateUserPhotoHandler))
        .event(
            EventKind::UserCreated,
            Arc::new(PublishEventHandler::new(
                producer.clone(),
                topics::USER_CREATED,
            )),
        )
        .event(
            EventKind::UserDeleted,
            Arc::new(PublishEventHandler::new(
                producer.clone(),
                topics::USER_DELETED,
            )),
        )
        .event(
            EventKind::RegistrationCompleted,
            Arc::new(PublishEventHandler::new(
                producer.clone(),
                topics::USER_REGISTRATION_COMPLETED,
            )),
        )
        .event(
            EventKind::PhotoUpdated,
            Arc::new(PublishEventHandler::new(
                producer,
                topics::USER_PHOTO_UPDATED,
            )),
        )
        .build()
}

/// Convenience constructor: default registry over the given unit of work.
pub fn bootstrap(uow: Arc<dyn UserUnitOfWork>, producer: Arc<dyn EventProducer>) -> MessageBus {
    MessageBus::new(uow, Arc::new(default_registry(producer)))
}

/// Creates one bus (with its own unit of work) per in-flight logical
/// operation: one web request, one inbound broker message.
pub trait BusFactory: Send + Sync {
    fn create_bus(&self) -> MessageBus;
}

/// Factory over the in-memory store; the registry is built once and shared.
pub struct InMemoryBusFactory {
    store: InMemoryUserStore,
    registry: Arc<HandlerRegistry>,
}

impl InMemoryBusFactory {
    /// Creates a factory for the given store and producer.
    pub fn new(store: InMemoryUserStore, producer: Arc<dyn EventProducer>) -> Self {
        Self {
            store,
            registry: Arc::new(default_registry(producer)),
        }
    }
}

impl BusFactory for InMemoryBusFactory {
    fn create_bus(&self) -> MessageBus {
        let uow = Arc::new(InMemoryUserUnitOfWork::new(self.store.clone()));
        MessageBus::new(uow, self.registry.clone())
    }
}
