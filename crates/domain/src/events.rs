//! User domain events.
//!
//! Events are facts that already happened. They are produced by domain logic
//! on the [`User`](crate::User) aggregate, buffered until the owning
//! transaction commits, and then dispatched to zero or more event handlers.

use chrono::{DateTime, Utc};
use common::{MessageId, UserId};
use serde::{Deserialize, Serialize};

use crate::user::CredentialsStatus;

/// Events produced by the user aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// A user was created; carries the credentials for the auth service.
    UserCreated(UserCreatedData),

    /// A user was removed from the service.
    UserDeleted(UserDeletedData),

    /// The auth service confirmed credentials; registration is complete.
    RegistrationCompleted(RegistrationCompletedData),

    /// The user's profile photo changed.
    PhotoUpdated(PhotoUpdatedData),
}

/// Registry key for an event variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    UserCreated,
    UserDeleted,
    RegistrationCompleted,
    PhotoUpdated,
}

impl Event {
    /// Returns the registry key for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::UserCreated(_) => EventKind::UserCreated,
            Event::UserDeleted(_) => EventKind::UserDeleted,
            Event::RegistrationCompleted(_) => EventKind::RegistrationCompleted,
            Event::PhotoUpdated(_) => EventKind::PhotoUpdated,
        }
    }

    /// Returns the event type name, used in logs and broker payloads.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::UserCreated(_) => "UserCreated",
            Event::UserDeleted(_) => "UserDeleted",
            Event::RegistrationCompleted(_) => "RegistrationCompleted",
            Event::PhotoUpdated(_) => "PhotoUpdated",
        }
    }

    /// Returns the unique ID assigned to this event instance.
    pub fn event_id(&self) -> MessageId {
        match self {
            Event::UserCreated(data) => data.event_id,
            Event::UserDeleted(data) => data.event_id,
            Event::RegistrationCompleted(data) => data.event_id,
            Event::PhotoUpdated(data) => data.event_id,
        }
    }

    /// Returns the user this event concerns.
    pub fn user_id(&self) -> UserId {
        match self {
            Event::UserCreated(data) => data.user_id,
            Event::UserDeleted(data) => data.user_id,
            Event::RegistrationCompleted(data) => data.user_id,
            Event::PhotoUpdated(data) => data.user_id,
        }
    }
}

/// Data for the UserCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedData {
    /// Unique ID of this event instance.
    pub event_id: MessageId,

    /// The newly created user.
    pub user_id: UserId,

    /// Email the user registered with.
    pub email: String,

    /// Raw password, forwarded once to the auth service.
    pub password: String,
}

/// Data for the UserDeleted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeletedData {
    /// Unique ID of this event instance.
    pub event_id: MessageId,

    /// The deleted user.
    pub user_id: UserId,
}

/// Data for the RegistrationCompleted event.
///
/// Carries the full profile so downstream services need no follow-up lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCompletedData {
    /// Unique ID of this event instance.
    pub event_id: MessageId,

    /// The registered user.
    pub user_id: UserId,

    /// Profile photo reference, empty if none was uploaded.
    pub photo: String,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// Email the user registered with.
    pub email: String,

    /// Optional phone number in international notation.
    pub phone_number: Option<String>,

    /// Optional first name.
    pub first_name: Option<String>,

    /// Optional last name.
    pub last_name: Option<String>,

    /// Optional middle name.
    pub middle_name: Option<String>,

    /// Credentials status at completion time.
    pub credentials_status: CredentialsStatus,
}

/// Data for the PhotoUpdated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUpdatedData {
    /// Unique ID of this event instance.
    pub event_id: MessageId,

    /// The user whose photo changed.
    pub user_id: UserId,

    /// New profile photo reference.
    pub photo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_matches_variant() {
        let event = Event::UserDeleted(UserDeletedData {
            event_id: MessageId::new(),
            user_id: UserId::new(),
        });
        assert_eq!(event.event_type(), "UserDeleted");
        assert_eq!(event.kind(), EventKind::UserDeleted);
    }

    #[test]
    fn event_serializes_full_field_set() {
        let user_id = UserId::new();
        let event = Event::UserCreated(UserCreatedData {
            event_id: MessageId::new(),
            user_id,
            email: "user@example.com".to_string(),
            password: "long-enough-secret".to_string(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "UserCreated");
        assert_eq!(json["data"]["email"], "user@example.com");
        assert_eq!(json["data"]["user_id"], user_id.to_string());
    }
}
