//! Domain error types.

use thiserror::Error;

/// Errors raised when constructing value objects from malformed input.
///
/// These fire at construction time, before a command exists, so a malformed
/// payload can never enter the dispatch queue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email must not be empty")]
    EmailEmpty,

    #[error("email too short: {0}")]
    EmailTooShort(String),

    #[error("email too long: {0}")]
    EmailTooLong(String),

    #[error("email missing '@' symbol: {0}")]
    EmailMissingAtSymbol(String),

    #[error("phone number must not be empty")]
    PhoneNumberEmpty,

    #[error("phone number too short: {0}")]
    PhoneNumberTooShort(String),

    #[error("phone number too long: {0}")]
    PhoneNumberTooLong(String),

    #[error("phone number must start with '+': {0}")]
    PhoneNumberMissingPlusSymbol(String),

    #[error("phone number contains non-digit characters: {0}")]
    PhoneNumberNonDigits(String),

    #[error("name must not be empty")]
    NameEmpty,

    #[error("name too long: {0}")]
    NameTooLong(String),

    #[error("password must not be empty")]
    PasswordEmpty,

    #[error("password too short")]
    PasswordTooShort,

    #[error("password too long")]
    PasswordTooLong,
}
