//! Restaurant Module
//!
//! Restaurant metadata with plain create/list/update/delete keyed by name.
//! Duplicate names are permitted; update and delete touch the first match.

mod store;

pub use store::RestaurantStore;
