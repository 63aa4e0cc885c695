//! Dashboard domain: aggregate back office statistics.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{fmt, serde_util};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard`. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_products: u64,
    pub total_orders: u64,
    #[serde(with = "serde_util::decimal_number")]
    pub total_revenue: Decimal,
}

/// One labelled figure, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: String,
}

impl DashboardStats {
    /// The four tiles in display order.
    pub fn tiles(&self) -> Vec<StatTile> {
        vec![
            StatTile {
                title: "Total Users",
                value: fmt::count(self.total_users),
            },
            StatTile {
                title: "Total Products",
                value: fmt::count(self.total_products),
            },
            StatTile {
                title: "Total Orders",
                value: fmt::count(self.total_orders),
            },
            StatTile {
                title: "Total Revenue",
                value: fmt::usd(&self.total_revenue),
            },
        ]
    }
}
