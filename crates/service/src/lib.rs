//! Service layer for the user service: the transactional command/event
//! dispatch core.
//!
//! This crate provides:
//! - [`MessageBus`] — FIFO dispatch of commands and events with cascading
//!   re-enqueue of harvested events
//! - [`UserUnitOfWork`] and [`UserRepository`] — the transactional boundary
//!   and touched-set tracking consumed by command handlers
//! - [`HandlerRegistry`] — build-once dispatch tables
//! - command/event handlers and the [`EventProducer`] contract they publish
//!   through

pub mod bootstrap;
pub mod bus;
pub mod cache;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod producer;
pub mod registry;
pub mod repository;
pub mod topics;
pub mod uow;

pub use bootstrap::{BusFactory, InMemoryBusFactory, bootstrap, default_registry};
pub use bus::MessageBus;
pub use cache::CachingUserRepository;
pub use error::{ProducerError, RepositoryError, ServiceError, UowError};
pub use handlers::{
    CommandHandler, CreateUserHandler, DeleteUserHandler, EventHandler, PublishEventHandler,
    UpdateCredentialsStatusHandler, UpdateUserPhotoHandler,
};
pub use memory::{InMemoryUserRepository, InMemoryUserStore, InMemoryUserUnitOfWork};
pub use producer::EventProducer;
pub use registry::{HandlerRegistry, RegistryBuilder};
pub use repository::UserRepository;
pub use uow::UserUnitOfWork;
