//! Reservation store
//!
//! Load-mutate-save operations over a `Collection<Reservation>`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{BookingError, Result};
use crate::model::Reservation;
use crate::storage::Collection;

use super::rules::{filter_upcoming, find_conflict};
use super::Confirmation;

/// The reservation book
///
/// ## Identifier Semantics
/// `holder_id` is not unique. `update` and `cancel` act on the first match
/// in storage order; `find_by_holder` returns every match.
pub struct ReservationStore<C> {
    collection: C,
}

impl<C: Collection<Reservation>> ReservationStore<C> {
    /// Create a store over the given collection
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Book a reservation
    ///
    /// Steps:
    /// 1. Validate fields
    /// 2. Load all reservations
    /// 3. Reject on (restaurant, time, party size) collision
    /// 4. Append and save
    pub fn create(&self, reservation: Reservation) -> Result<Confirmation> {
        reservation.validate()?;

        let mut reservations = self.collection.load_all()?;

        if find_conflict(&reservations, &reservation).is_some() {
            tracing::warn!(
                restaurant = %reservation.restaurant_name,
                time = %reservation.time,
                party_size = reservation.party_size,
                "Rejected conflicting reservation"
            );
            return Err(Self::conflict(&reservation));
        }

        let position = reservations.len();
        reservations.push(reservation.clone());
        self.collection.save_all(&reservations)?;

        tracing::info!(
            restaurant = %reservation.restaurant_name,
            holder_id = %reservation.holder_id,
            position,
            "Reservation created"
        );
        Ok(Confirmation {
            reservation,
            position,
        })
    }

    /// All reservations in storage order; empty is a normal state
    pub fn list_all(&self) -> Result<Vec<Reservation>> {
        self.collection.load_all()
    }

    /// Move the first reservation held by `holder_id` to a new date and time
    ///
    /// Only `date` and `time` change. The move is rejected if the new time
    /// would collide with another reservation.
    pub fn update(
        &self,
        holder_id: &str,
        new_date: NaiveDate,
        new_time: NaiveTime,
    ) -> Result<Reservation> {
        let mut reservations = self.collection.load_all()?;

        let index = Self::position_of(&reservations, holder_id)?;

        let mut moved = reservations[index].clone();
        moved.date = new_date;
        moved.time = new_time;

        let collides = reservations
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.conflicts_with(&moved));
        if collides {
            tracing::warn!(holder_id, time = %new_time, "Rejected conflicting update");
            return Err(Self::conflict(&moved));
        }

        reservations[index] = moved.clone();
        self.collection.save_all(&reservations)?;

        tracing::info!(holder_id, date = %new_date, time = %new_time, "Reservation updated");
        Ok(moved)
    }

    /// Remove the first reservation held by `holder_id`
    pub fn cancel(&self, holder_id: &str) -> Result<Reservation> {
        let mut reservations = self.collection.load_all()?;

        let index = Self::position_of(&reservations, holder_id)?;
        let removed = reservations.remove(index);
        self.collection.save_all(&reservations)?;

        tracing::info!(holder_id, restaurant = %removed.restaurant_name, "Reservation cancelled");
        Ok(removed)
    }

    /// Every reservation held by `holder_id`
    pub fn find_by_holder(&self, holder_id: &str) -> Result<Vec<Reservation>> {
        let reservations = self.collection.load_all()?;
        Ok(reservations
            .into_iter()
            .filter(|r| r.holder_id == holder_id)
            .collect())
    }

    /// Reservations that have not elapsed at `reference`
    ///
    /// Includes anything dated after the reference day, and same-day
    /// reservations at or after the reference time.
    pub fn upcoming(&self, reference: NaiveDateTime) -> Result<Vec<Reservation>> {
        let reservations = self.collection.load_all()?;
        Ok(filter_upcoming(reservations, reference))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position_of(reservations: &[Reservation], holder_id: &str) -> Result<usize> {
        reservations
            .iter()
            .position(|r| r.holder_id == holder_id)
            .ok_or_else(|| {
                tracing::warn!(holder_id, "No reservation for holder");
                BookingError::NotFound(format!("no reservation for holder id {}", holder_id))
            })
    }

    fn conflict(reservation: &Reservation) -> BookingError {
        BookingError::Conflict {
            restaurant_name: reservation.restaurant_name.clone(),
            time: reservation.time,
            party_size: reservation.party_size,
        }
    }
}
