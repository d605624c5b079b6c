//! Shared identifier types for the user service.

mod types;

pub use types::{MessageId, UserId};
