//! Contact message model and validation, shared by the form and the endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_CHARS: usize = 120;
pub const MAX_EMAIL_CHARS: usize = 254;
pub const MAX_MESSAGE_CHARS: usize = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("{field} exceeds {limit} characters")]
    TooLong { field: ContactField, limit: usize },
    #[error("failed to store message: {0}")]
    Inbox(String),
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trimmed copy of the message, or the first field that fails validation.
    pub fn normalized(&self) -> Result<Self, ContactError> {
        let name = checked(&self.name, ContactField::Name, MAX_NAME_CHARS)?;
        let email = checked(&self.email, ContactField::Email, MAX_EMAIL_CHARS)?;
        let message = checked(&self.message, ContactField::Message, MAX_MESSAGE_CHARS)?;

        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn checked(raw: &str, field: ContactField, limit: usize) -> Result<String, ContactError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    if value.chars().count() > limit {
        return Err(ContactError::TooLong { field, limit });
    }
    Ok(value.to_string())
}

/// Shape check only: one `@`, a non-empty local part and a dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
