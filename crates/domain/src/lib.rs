//! Domain layer for the user service.
//!
//! This crate provides the pure domain model:
//! - User aggregate with a buffered-event contract
//! - Validated value objects for profile fields
//! - Command, Event, and Message types dispatched by the service layer

pub mod commands;
pub mod error;
pub mod events;
pub mod message;
pub mod user;
pub mod value_objects;

pub use commands::{
    Command, CommandKind, CreateUser, DeleteUser, UpdateCredentialsStatus, UpdateUserPhoto,
};
pub use error::ValidationError;
pub use events::{
    Event, EventKind, PhotoUpdatedData, RegistrationCompletedData, UserCreatedData,
    UserDeletedData,
};
pub use message::Message;
pub use user::{CredentialsStatus, User, UserProfile};
pub use value_objects::{Email, Password, PersonName, PhoneNumber};
