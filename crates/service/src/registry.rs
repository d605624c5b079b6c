//! Handler registry: static dispatch tables built once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use domain::{CommandKind, EventKind};

use crate::handlers::{CommandHandler, EventHandler};

/// Maps command types to exactly one handler and event types to zero or
/// more handlers.
///
/// Built once by [`RegistryBuilder`] and immutable afterward; there is no
/// dynamic resolution at dispatch time.
#[derive(Default)]
pub struct HandlerRegistry {
    commands: HashMap<CommandKind, Arc<dyn CommandHandler>>,
    events: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl HandlerRegistry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up the single handler for a command type.
    ///
    /// `None` is fatal to the caller: a command without a handler is a
    /// wiring error, never a valid state.
    pub fn command_handler(&self, kind: CommandKind) -> Option<Arc<dyn CommandHandler>> {
        self.commands.get(&kind).cloned()
    }

    /// Looks up the handlers for an event type, in registration order.
    ///
    /// An empty list is valid: a fact with no subscriber is silently
    /// dropped.
    pub fn event_handlers(&self, kind: EventKind) -> &[Arc<dyn EventHandler>] {
        self.events.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builder for [`HandlerRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    registry: HandlerRegistry,
}

impl RegistryBuilder {
    /// Registers the handler for a command type, replacing any previous one
    /// (cardinality is exactly one).
    pub fn command(mut self, kind: CommandKind, handler: Arc<dyn CommandHandler>) -> Self {
        self.registry.commands.insert(kind, handler);
        self
    }

    /// Appends a handler for an event type.
    pub fn event(mut self, kind: EventKind, handler: Arc<dyn EventHandler>) -> Self {
        self.registry.events.entry(kind).or_default().push(handler);
        self
    }

    /// Finalizes the registry.
    pub fn build(self) -> HandlerRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::{Command, Event};

    use crate::error::ServiceError;
    use crate::uow::UserUnitOfWork;

    struct NoopCommandHandler;

    #[async_trait]
    impl CommandHandler for NoopCommandHandler {
        async fn handle(
            &self,
            _command: Command,
            _uow: &dyn UserUnitOfWork,
        ) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    struct NoopEventHandler;

    #[async_trait]
    impl EventHandler for NoopEventHandler {
        async fn handle(&self, _event: &Event) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    #[test]
    fn unregistered_command_has_no_handler() {
        let registry = HandlerRegistry::builder().build();
        assert!(registry.command_handler(CommandKind::CreateUser).is_none());
    }

    #[test]
    fn unregistered_event_has_empty_handler_list() {
        let registry = HandlerRegistry::builder().build();
        assert!(registry.event_handlers(EventKind::UserCreated).is_empty());
    }

    #[test]
    fn event_handlers_keep_registration_order() {
        let registry = HandlerRegistry::builder()
            .command(CommandKind::CreateUser, Arc::new(NoopCommandHandler))
            .event(EventKind::UserCreated, Arc::new(NoopEventHandler))
            .event(EventKind::UserCreated, Arc::new(NoopEventHandler))
            .build();

        assert!(registry.command_handler(CommandKind::CreateUser).is_some());
        assert_eq!(registry.event_handlers(EventKind::UserCreated).len(), 2);
    }
}
