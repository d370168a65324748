//! Conflict and time-window rules
//!
//! Pure functions over a loaded collection, shared by the store and the
//! benchmarks.

use chrono::NaiveDateTime;

use crate::model::Reservation;

/// First existing reservation that `candidate` collides with
pub fn find_conflict<'a>(
    existing: &'a [Reservation],
    candidate: &Reservation,
) -> Option<&'a Reservation> {
    existing.iter().find(|r| r.conflicts_with(candidate))
}

/// Reservations not yet elapsed at `reference`, in storage order
pub fn filter_upcoming(
    reservations: impl IntoIterator<Item = Reservation>,
    reference: NaiveDateTime,
) -> Vec<Reservation> {
    reservations
        .into_iter()
        .filter(|r| r.is_upcoming(reference))
        .collect()
}
