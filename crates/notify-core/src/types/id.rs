//! Newtype wrappers around document identifiers.
//!
//! Document stores key records by opaque strings; the wrapper marks a string
//! that has already been checked to be a usable user document ID.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting only empty input.
            ///
            /// Whitespace is significant: `" "` is a valid document ID.
            pub fn parse(raw: impl Into<String>) -> Option<Self> {
                let raw = raw.into();
                if raw.is_empty() {
                    None
                } else {
                    Some(Self(raw))
                }
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a user document (landlord or tenant).
    RecipientId
);
