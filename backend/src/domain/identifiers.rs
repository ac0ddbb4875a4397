//! UUID-backed entity identifiers.

/// Error returned when an identifier string is not a valid UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The input was empty.
    #[error("identifier must not be empty")]
    Empty,
    /// The input is not UUID syntax.
    #[error("identifier must be a valid UUID")]
    Invalid,
}

macro_rules! define_uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generate a new random (v4) identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::IdentifierError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                if raw.is_empty() {
                    return Err($crate::domain::IdentifierError::Empty);
                }
                uuid::Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| $crate::domain::IdentifierError::Invalid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_uuid_id;
