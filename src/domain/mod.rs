//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types (validated, view-ready)
//! - `wire.rs`: Raw serde structs matching backend requests/responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods
//!
//! `order::composer` and `catalog` hold the app-owned state for the order form.

pub mod catalog;
pub mod category;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod user;
