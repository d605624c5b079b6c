//! Service-layer error types.
//!
//! Command-path failures are loud: they abort the whole `handle` call.
//! Event-path failures are isolated: logged and counted, never propagated
//! past the dispatch loop.

use common::UserId;
use thiserror::Error;

/// Errors raised by repository operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested aggregate does not exist. Surfaced to the calling
    /// command handler, which decides whether to abort its transaction.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// An aggregate with this identity is already registered in the scope.
    #[error("user already exists: {0}")]
    Duplicate(UserId),
}

/// Errors raised by the unit of work's transaction control.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UowError {
    /// The underlying transactional resource failed to commit. The unit of
    /// work has already rolled back; no half-applied state remains.
    #[error("commit failed: {0}")]
    Commit(String),

    /// Commit or rollback was called without an active transaction.
    #[error("no active transaction")]
    NotActive,
}

/// Errors raised by the outbound producer adapter.
#[derive(Debug, Clone, Error)]
pub enum ProducerError {
    /// The broker connection could not be established.
    #[error("broker connection failed: {0}")]
    Connection(String),

    /// Publishing to a topic failed.
    #[error("publish to topic {topic} failed: {reason}")]
    Publish { topic: String, reason: String },
}

/// Fatal errors surfaced by `MessageBus::handle`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No handler registered for a command type. Deliberate poison-command
    /// policy: the whole `handle` call aborts, remaining queued messages are
    /// dropped.
    #[error("no handler registered for command {0}")]
    HandlerNotFound(&'static str),

    /// A handler received a message variant it was not registered for.
    /// This is a registry wiring bug, fatal on the command path.
    #[error("handler {handler} received unexpected message type {message}")]
    WrongMessageType {
        handler: &'static str,
        message: &'static str,
    },

    /// A repository operation failed inside a command handler.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Commit or rollback failed in the underlying transactional resource.
    #[error("transaction failed: {0}")]
    Transaction(#[from] UowError),

    /// The outbound producer rejected a publish. Only fatal when it escapes
    /// an event handler into a command path, which the bus never does.
    #[error(transparent)]
    Producer(#[from] ProducerError),
}
