//! Catalog users.

use chrono::{DateTime, Utc};

use super::identifiers::define_uuid_id;

define_uuid_id! {
    /// Stable user identifier.
    UserId
}

/// Validation errors returned by the user value objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email lacks a local part, an `@`, or a domain.
    #[error("email must look like local@domain")]
    MalformedEmail,
    /// Display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// Trimmed, lower-cased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalise and validate an email address.
    ///
    /// # Examples
    /// ```
    /// use catalog_api::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("  Ada@Example.COM ").expect("valid email");
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        match normalised.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(normalised))
            }
            _ => Err(UserValidationError::MalformedEmail),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Trimmed, non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Trim and validate a display name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    name: DisplayName,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub fn new(
        id: UserId,
        email: EmailAddress,
        name: DisplayName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
        }
    }

    /// User identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Normalised email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Server-assigned creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Insert shape for a user, normalised at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    id: UserId,
    email: EmailAddress,
    name: DisplayName,
}

impl NewUser {
    /// Build an insertable user with a freshly generated identifier.
    pub fn new(email: &str, name: &str) -> Result<Self, UserValidationError> {
        Ok(Self {
            id: UserId::random(),
            email: EmailAddress::new(email)?,
            name: DisplayName::new(name)?,
        })
    }

    /// Identifier assigned before the insert.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Normalised email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}
