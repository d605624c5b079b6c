//! Command and event handlers.

pub mod command;
pub mod event;

pub use command::{
    CommandHandler, CreateUserHandler, DeleteUserHandler, UpdateCredentialsStatusHandler,
    UpdateUserPhotoHandler,
};
pub use event::{EventHandler, PublishEventHandler};
