//! Reservation Module
//!
//! The reservation book: the only part of the system with decision logic.
//!
//! ## Responsibilities
//! - Reject bookings that collide on (restaurant, time, party size)
//! - Update / cancel by holder id (first match only)
//! - Look up by holder id (all matches)
//! - Select reservations that have not yet elapsed
//!
//! ## Operation Cycle
//! ```text
//! load_all ──▶ check / mutate in memory ──▶ save_all
//! ```
//! Reads skip the save. A rejected operation never reaches `save_all`.

mod rules;
mod store;

pub use rules::{filter_upcoming, find_conflict};
pub use store::ReservationStore;

use crate::model::Reservation;

/// Echo of a stored reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The reservation exactly as persisted
    pub reservation: Reservation,

    /// Zero-based position in storage order
    pub position: usize,
}
