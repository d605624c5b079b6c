//! Validated value objects for user profile fields.
//!
//! Each value object rejects malformed input at construction time, so a
//! command built from these types can never carry an invalid payload into
//! the message bus.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates and wraps an email address.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmailEmpty);
        }
        if value.len() < 5 {
            return Err(ValidationError::EmailTooShort(value));
        }
        if value.len() > 255 {
            return Err(ValidationError::EmailTooLong(value));
        }
        if !value.contains('@') {
            return Err(ValidationError::EmailMissingAtSymbol(value));
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated phone number in international notation (`+` followed by digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates and wraps a phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::PhoneNumberEmpty);
        }
        if value.len() < 7 {
            return Err(ValidationError::PhoneNumberTooShort(value));
        }
        if value.len() > 15 {
            return Err(ValidationError::PhoneNumberTooLong(value));
        }
        let Some(digits) = value.strip_prefix('+') else {
            return Err(ValidationError::PhoneNumberMissingPlusSymbol(value));
        };
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneNumberNonDigits(value));
        }
        Ok(Self(value))
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated personal name component (first, last, or middle name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validates and wraps a name.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::NameEmpty);
        }
        if value.len() > 255 {
            return Err(ValidationError::NameTooLong(value));
        }
        Ok(Self(value))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated raw password.
///
/// The service never stores this; it is forwarded once to the auth service
/// inside the `UserCreated` event. `Debug` and `Display` are deliberately
/// not derived for the inner value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Validates and wraps a raw password.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::PasswordEmpty);
        }
        if value.len() < 8 {
            return Err(ValidationError::PasswordTooShort);
        }
        if value.len() > 255 {
            return Err(ValidationError::PasswordTooLong);
        }
        Ok(Self(value))
    }

    /// Returns the raw password.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_valid_address() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn email_rejects_empty() {
        assert!(matches!(Email::new(""), Err(ValidationError::EmailEmpty)));
    }

    #[test]
    fn email_rejects_too_short() {
        assert!(matches!(
            Email::new("a@b"),
            Err(ValidationError::EmailTooShort(_))
        ));
    }

    #[test]
    fn email_rejects_too_long() {
        let long = format!("{}@x.com", "a".repeat(255));
        assert!(matches!(
            Email::new(long),
            Err(ValidationError::EmailTooLong(_))
        ));
    }

    #[test]
    fn email_rejects_missing_at_symbol() {
        assert!(matches!(
            Email::new("user.example.com"),
            Err(ValidationError::EmailMissingAtSymbol(_))
        ));
    }

    #[test]
    fn phone_number_accepts_international_notation() {
        let phone = PhoneNumber::new("+15551234567").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");
    }

    #[test]
    fn phone_number_rejects_missing_plus() {
        assert!(matches!(
            PhoneNumber::new("15551234567"),
            Err(ValidationError::PhoneNumberMissingPlusSymbol(_))
        ));
    }

    #[test]
    fn phone_number_rejects_non_digits() {
        assert!(matches!(
            PhoneNumber::new("+1555CALLME"),
            Err(ValidationError::PhoneNumberNonDigits(_))
        ));
    }

    #[test]
    fn phone_number_rejects_bad_lengths() {
        assert!(matches!(
            PhoneNumber::new("+1234"),
            Err(ValidationError::PhoneNumberTooShort(_))
        ));
        assert!(matches!(
            PhoneNumber::new("+123456789012345678"),
            Err(ValidationError::PhoneNumberTooLong(_))
        ));
    }

    #[test]
    fn person_name_rejects_empty_and_too_long() {
        assert!(matches!(
            PersonName::new(""),
            Err(ValidationError::NameEmpty)
        ));
        assert!(matches!(
            PersonName::new("x".repeat(256)),
            Err(ValidationError::NameTooLong(_))
        ));
        assert!(PersonName::new("Ada").is_ok());
    }

    #[test]
    fn password_enforces_length_bounds() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::PasswordEmpty)
        ));
        assert!(matches!(
            Password::new("short"),
            Err(ValidationError::PasswordTooShort)
        ));
        assert!(Password::new("long-enough-secret").is_ok());
    }

    #[test]
    fn password_debug_hides_value() {
        let password = Password::new("super-secret-value").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }
}
