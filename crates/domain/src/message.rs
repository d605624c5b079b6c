//! The message sum type accepted by the bus.

use crate::commands::Command;
use crate::events::Event;

/// A message on the dispatch queue: either a command or an event.
///
/// The sum type is closed; the queue cannot hold any other shape.
#[derive(Debug, Clone)]
pub enum Message {
    /// An intent to change state, dispatched to exactly one handler.
    Command(Command),

    /// A fact that already happened, dispatched to zero or more handlers.
    Event(Event),
}

impl Message {
    /// Returns the message type name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Message::Command(cmd) => cmd.name(),
            Message::Event(event) => event.event_type(),
        }
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Message::Command(command)
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Event(event)
    }
}
