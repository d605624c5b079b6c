//! User aggregate.
//!
//! The aggregate buffers every event its domain logic produces. Nothing else
//! may append to the buffer, and the buffer is drained exactly once per
//! harvest via [`User::take_events`].

use chrono::{DateTime, Utc};
use common::{MessageId, UserId};
use serde::{Deserialize, Serialize};

use crate::events::{
    Event, PhotoUpdatedData, RegistrationCompletedData, UserCreatedData, UserDeletedData,
};
use crate::value_objects::{Email, Password, PersonName, PhoneNumber};

/// Status of the user's credentials in the external auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialsStatus {
    /// Credentials were sent to the auth service, no confirmation yet.
    #[default]
    Pending,

    /// The auth service confirmed the credentials.
    Success,

    /// The auth service rejected the credentials.
    Failure,
}

impl std::fmt::Display for CredentialsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CredentialsStatus::Pending => "pending",
            CredentialsStatus::Success => "success",
            CredentialsStatus::Failure => "failure",
        };
        f.write_str(s)
    }
}

/// Validated profile fields supplied when registering a user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub middle_name: Option<PersonName>,
}

impl UserProfile {
    /// Creates a profile with only the required email set.
    pub fn with_email(email: Email) -> Self {
        Self {
            email,
            phone_number: None,
            first_name: None,
            last_name: None,
            middle_name: None,
        }
    }
}

/// User aggregate root.
///
/// Identity-bearing mutable entity; equality and hashing are identity-based
/// so the same logical user appears once in a touched set no matter how many
/// operations touched it.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    created_at: DateTime<Utc>,
    email: Email,
    phone_number: Option<PhoneNumber>,
    first_name: Option<PersonName>,
    last_name: Option<PersonName>,
    middle_name: Option<PersonName>,
    photo: String,
    credentials_status: CredentialsStatus,
    events: Vec<Event>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl User {
    /// Registers a new user and buffers the `UserCreated` event carrying the
    /// credentials destined for the auth service.
    pub fn register(profile: UserProfile, password: &Password) -> Self {
        let mut user = Self {
            id: UserId::new(),
            created_at: Utc::now(),
            email: profile.email,
            phone_number: profile.phone_number,
            first_name: profile.first_name,
            last_name: profile.last_name,
            middle_name: profile.middle_name,
            photo: String::new(),
            credentials_status: CredentialsStatus::Pending,
            events: Vec::new(),
        };
        user.record(Event::UserCreated(UserCreatedData {
            event_id: MessageId::new(),
            user_id: user.id,
            email: user.email.as_str().to_string(),
            password: password.as_str().to_string(),
        }));
        user
    }

    /// Updates the credentials status reported by the auth service.
    ///
    /// A transition to [`CredentialsStatus::Success`] completes registration
    /// and buffers `RegistrationCompleted` with the full profile.
    pub fn update_credentials_status(&mut self, status: CredentialsStatus) {
        self.credentials_status = status;
        if status == CredentialsStatus::Success {
            self.record(Event::RegistrationCompleted(RegistrationCompletedData {
                event_id: MessageId::new(),
                user_id: self.id,
                photo: self.photo.clone(),
                created_at: self.created_at,
                email: self.email.as_str().to_string(),
                phone_number: self.phone_number.as_ref().map(|p| p.as_str().to_string()),
                first_name: self.first_name.as_ref().map(|n| n.as_str().to_string()),
                last_name: self.last_name.as_ref().map(|n| n.as_str().to_string()),
                middle_name: self.middle_name.as_ref().map(|n| n.as_str().to_string()),
                credentials_status: status,
            }));
        }
    }

    /// Replaces the profile photo and buffers `PhotoUpdated`.
    pub fn update_photo(&mut self, photo: impl Into<String>) {
        self.photo = photo.into();
        self.record(Event::PhotoUpdated(PhotoUpdatedData {
            event_id: MessageId::new(),
            user_id: self.id,
            photo: self.photo.clone(),
        }));
    }

    /// Marks the user as deleted and buffers `UserDeleted`.
    ///
    /// The repository keeps the aggregate in its touched set after removal so
    /// this event still gets harvested.
    pub fn mark_deleted(&mut self) {
        self.record(Event::UserDeleted(UserDeletedData {
            event_id: MessageId::new(),
            user_id: self.id,
        }));
    }

    /// Atomically drains the event buffer, returning it in emission order.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Returns a copy suitable for persistence: same state, empty buffer.
    ///
    /// Buffered events stay with the transactional scope that produced them.
    pub fn snapshot(&self) -> User {
        let mut copy = self.clone();
        copy.events.clear();
        copy
    }

    /// Number of buffered, not-yet-harvested events.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn record(&mut self, event: Event) {
        self.events.push(event);
    }
}

// Accessors
impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    pub fn first_name(&self) -> Option<&PersonName> {
        self.first_name.as_ref()
    }

    pub fn last_name(&self) -> Option<&PersonName> {
        self.last_name.as_ref()
    }

    pub fn middle_name(&self) -> Option<&PersonName> {
        self.middle_name.as_ref()
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn credentials_status(&self) -> CredentialsStatus {
        self.credentials_status
    }
}
