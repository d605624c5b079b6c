//! Outbound broker topics.
//!
//! One topic per (event type, handler) pairing, assigned when the registry
//! is built.

/// A user was created; consumed by the auth service.
pub const USER_CREATED: &str = "user.created";

/// A user was deleted.
pub const USER_DELETED: &str = "user.deleted";

/// Registration completed after credentials confirmation.
pub const USER_REGISTRATION_COMPLETED: &str = "user.registration.completed";

/// A user's profile photo changed.
pub const USER_PHOTO_UPDATED: &str = "user.photo.updated";
