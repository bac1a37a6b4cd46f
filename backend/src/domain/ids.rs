//! Opaque identifiers for marketplace aggregates.
//!
//! Identifiers are non-empty strings without surrounding whitespace. Seeded
//! records use short human-readable keys (`"1"`, `"user1"`), freshly created
//! records use UUID strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} must not contain surrounding whitespace")]
    Untrimmed { kind: &'static str },
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            /// Generate a fresh UUID-backed identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            fn from_owned(id: String) -> Result<Self, IdentifierValidationError> {
                if id.is_empty() {
                    return Err(IdentifierValidationError::Empty { kind: $kind });
                }
                if id.trim() != id {
                    return Err(IdentifierValidationError::Untrimmed { kind: $kind });
                }
                Ok(Self(id))
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }
    };
}

define_identifier!(
    /// Identifier of a listed product.
    ProductId => "product id"
);
define_identifier!(
    /// Identifier of a marketplace user (buyer or seller).
    UserId => "user id"
);
define_identifier!(
    /// Identifier of a loyalty stamp card.
    StampCardId => "stamp card id"
);
define_identifier!(
    /// Identifier of a buyer review.
    ReviewId => "review id"
);
define_identifier!(
    /// Identifier of a product category.
    CategoryId => "category id"
);
