//! Category domain: product groupings.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{CategoryId, Identified};
use serde::{Deserialize, Serialize};

pub use wire::{CategoryPatch, NewCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Identified for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
