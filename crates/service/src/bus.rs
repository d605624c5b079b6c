//! The message bus: FIFO dispatch of commands and events.

use std::collections::VecDeque;
use std::sync::Arc;

use domain::{Command, Event, Message};

use crate::error::ServiceError;
use crate::registry::HandlerRegistry;
use crate::uow::UserUnitOfWork;

/// Processes commands and events in strict arrival order.
///
/// One bus, with its unit of work and dispatch queue, serves exactly one
/// in-flight logical operation; construct a fresh pair per operation (see
/// [`BusFactory`](crate::bootstrap::BusFactory)).
///
/// Ordering is breadth-first: events harvested while handling message N are
/// appended after everything already queued, never interleaved ahead of
/// older work. Within one harvest the order is touched-set order, each
/// aggregate buffer in emission order.
pub struct MessageBus {
    uow: Arc<dyn UserUnitOfWork>,
    registry: Arc<HandlerRegistry>,
    queue: VecDeque<Message>,
}

impl MessageBus {
    /// Creates a bus over the given unit of work and registry.
    pub fn new(uow: Arc<dyn UserUnitOfWork>, registry: Arc<HandlerRegistry>) -> Self {
        Self {
            uow,
            registry,
            queue: VecDeque::new(),
        }
    }

    /// Returns the bus's unit of work.
    pub fn uow(&self) -> &Arc<dyn UserUnitOfWork> {
        &self.uow
    }

    /// Dispatches a message and everything it cascades into.
    ///
    /// Drains the queue to empty on success. A command-path failure aborts
    /// the call and drops the remaining queued messages; an event handler
    /// failure is logged and counted but never aborts.
    #[tracing::instrument(skip_all, fields(message = message.name()))]
    pub async fn handle(&mut self, message: Message) -> Result<(), ServiceError> {
        self.queue.push_back(message);

        while let Some(message) = self.queue.pop_front() {
            let result = match message {
                Message::Command(command) => self.handle_command(command).await,
                Message::Event(event) => {
                    self.handle_event(event).await;
                    Ok(())
                }
            };
            if let Err(error) = result {
                tracing::error!(%error, "message queue processing aborted");
                self.queue.clear();
                return Err(error);
            }
        }

        tracing::debug!("message queue drained");
        Ok(())
    }

    async fn handle_command(&mut self, command: Command) -> Result<(), ServiceError> {
        tracing::info!(command = command.name(), command_id = %command.command_id(), "handling command");
        metrics::counter!("bus_commands_total").increment(1);

        let Some(handler) = self.registry.command_handler(command.kind()) else {
            tracing::error!(command = command.name(), "no handler registered for command");
            return Err(ServiceError::HandlerNotFound(command.name()));
        };

        handler.handle(command, self.uow.as_ref()).await?;
        self.enqueue_harvested().await;
        Ok(())
    }

    async fn handle_event(&mut self, event: Event) {
        tracing::info!(event = event.event_type(), event_id = %event.event_id(), "handling event");
        metrics::counter!("bus_events_total").increment(1);

        let handlers = self.registry.event_handlers(event.kind()).to_vec();
        if handlers.is_empty() {
            // A fact with no subscriber is valid; drop it silently.
            tracing::debug!(event = event.event_type(), "no handlers registered, dropping event");
            return;
        }

        for handler in handlers {
            if let Err(error) = handler.handle(&event).await {
                metrics::counter!("event_handler_failures_total").increment(1);
                tracing::warn!(
                    event = event.event_type(),
                    event_id = %event.event_id(),
                    %error,
                    "event handler failed, continuing"
                );
            }
        }
        self.enqueue_harvested().await;
    }

    async fn enqueue_harvested(&mut self) {
        let harvested = self.uow.harvest_events().await;
        if !harvested.is_empty() {
            tracing::debug!(count = harvested.len(), "enqueueing harvested events");
        }
        self.queue.extend(harvested.into_iter().map(Message::from));
    }
}
