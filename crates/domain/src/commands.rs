//! User commands.
//!
//! Commands are intents to change state. Each variant dispatches to exactly
//! one registered handler; a variant without a handler is a fatal wiring
//! error at dispatch time.

use common::{MessageId, UserId};

use crate::user::{CredentialsStatus, UserProfile};
use crate::value_objects::Password;

/// Commands accepted by the message bus.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a new user with the given profile and credentials.
    CreateUser(CreateUser),

    /// Delete an existing user.
    DeleteUser(DeleteUser),

    /// Record the credentials status reported by the auth service.
    UpdateCredentialsStatus(UpdateCredentialsStatus),

    /// Replace a user's profile photo.
    UpdateUserPhoto(UpdateUserPhoto),
}

/// Registry key for a command variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    CreateUser,
    DeleteUser,
    UpdateCredentialsStatus,
    UpdateUserPhoto,
}

impl Command {
    /// Returns the registry key for this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::CreateUser(_) => CommandKind::CreateUser,
            Command::DeleteUser(_) => CommandKind::DeleteUser,
            Command::UpdateCredentialsStatus(_) => CommandKind::UpdateCredentialsStatus,
            Command::UpdateUserPhoto(_) => CommandKind::UpdateUserPhoto,
        }
    }

    /// Returns the command type name, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateUser(_) => "CreateUser",
            Command::DeleteUser(_) => "DeleteUser",
            Command::UpdateCredentialsStatus(_) => "UpdateCredentialsStatus",
            Command::UpdateUserPhoto(_) => "UpdateUserPhoto",
        }
    }

    /// Returns the unique ID assigned to this command instance.
    pub fn command_id(&self) -> MessageId {
        match self {
            Command::CreateUser(cmd) => cmd.command_id,
            Command::DeleteUser(cmd) => cmd.command_id,
            Command::UpdateCredentialsStatus(cmd) => cmd.command_id,
            Command::UpdateUserPhoto(cmd) => cmd.command_id,
        }
    }
}

/// Command to create a new user.
///
/// Carries already-validated value objects; malformed input is rejected
/// before a command can be constructed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Unique ID of this command instance.
    pub command_id: MessageId,

    /// Validated profile fields.
    pub profile: UserProfile,

    /// Raw password, forwarded to the auth service via `UserCreated`.
    pub password: Password,
}

impl CreateUser {
    /// Creates a new CreateUser command.
    pub fn new(profile: UserProfile, password: Password) -> Self {
        Self {
            command_id: MessageId::new(),
            profile,
            password,
        }
    }
}

/// Command to delete an existing user.
#[derive(Debug, Clone)]
pub struct DeleteUser {
    /// Unique ID of this command instance.
    pub command_id: MessageId,

    /// The user to delete.
    pub user_id: UserId,
}

impl DeleteUser {
    /// Creates a new DeleteUser command.
    pub fn new(user_id: UserId) -> Self {
        Self {
            command_id: MessageId::new(),
            user_id,
        }
    }
}

/// Command to record the credentials status reported by the auth service.
#[derive(Debug, Clone)]
pub struct UpdateCredentialsStatus {
    /// Unique ID of this command instance.
    pub command_id: MessageId,

    /// The user whose credentials were processed.
    pub user_id: UserId,

    /// Outcome reported by the auth service.
    pub status: CredentialsStatus,
}

impl UpdateCredentialsStatus {
    /// Creates a new UpdateCredentialsStatus command.
    pub fn new(user_id: UserId, status: CredentialsStatus) -> Self {
        Self {
            command_id: MessageId::new(),
            user_id,
            status,
        }
    }
}

/// Command to replace a user's profile photo.
#[derive(Debug, Clone)]
pub struct UpdateUserPhoto {
    /// Unique ID of this command instance.
    pub command_id: MessageId,

    /// The user whose photo changes.
    pub user_id: UserId,

    /// New profile photo reference.
    pub photo: String,
}

impl UpdateUserPhoto {
    /// Creates a new UpdateUserPhoto command.
    pub fn new(user_id: UserId, photo: impl Into<String>) -> Self {
        Self {
            command_id: MessageId::new(),
            user_id,
            photo: photo.into(),
        }
    }
}
