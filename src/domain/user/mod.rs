//! User domain: the customers orders are placed for.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{Identified, UserId};
use serde::{Deserialize, Serialize};

pub use wire::{NewUser, UserPatch};

/// A back office user (customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
}

impl User {
    /// `"Jane Doe (jane@example.com)"`, the label used in user pickers.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
