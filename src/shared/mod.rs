//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifier newtypes are serialization-transparent: they serialize and
//! deserialize as the bare JSON strings the backend sends, so wire types can
//! use them directly.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────────────

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Form selects submit `""` for "nothing chosen".
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Back office user (customer) identifier.
    UserId
);
string_id!(
    /// Category identifier.
    CategoryId
);
string_id!(
    /// Product identifier.
    ProductId
);
string_id!(
    /// Persisted order identifier.
    OrderId
);

// ─── Reference<T> ────────────────────────────────────────────────────────────

/// Anything with an id and a display name.
pub trait Identified {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
}

/// A foreign key that the backend sends either as a bare id or as the
/// populated document.
///
/// `null` (a populate whose target was deleted) reads as `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Resolved(T),
    Missing,
}

impl<T> Default for Reference<T> {
    fn default() -> Self {
        Reference::Missing
    }
}

/// Shown when a reference cannot be resolved to a name.
pub const UNKNOWN_NAME: &str = "Unknown";

impl<T: Identified> Reference<T> {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Resolved(value) => value.id(),
            Reference::Missing => "",
        }
    }

    /// The referenced value: embedded if populated, otherwise looked up in `pool`.
    pub fn resolve<'a>(&'a self, pool: &'a [T]) -> Option<&'a T> {
        match self {
            Reference::Resolved(value) => Some(value),
            Reference::Id(id) => pool.iter().find(|candidate| candidate.id() == id),
            Reference::Missing => None,
        }
    }

    /// Display name, or [`UNKNOWN_NAME`] when the reference dangles.
    pub fn display_name<'a>(&'a self, pool: &'a [T]) -> &'a str {
        self.resolve(pool)
            .map(Identified::display_name)
            .unwrap_or(UNKNOWN_NAME)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Reference::Resolved(_))
    }
}

impl<T> From<&str> for Reference<T> {
    fn from(id: &str) -> Self {
        Reference::Id(id.to_string())
    }
}
