//! Reservation record

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

use super::format;

/// A booking of a table at a named restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub restaurant_name: String,

    pub holder_name: String,

    /// Tax id of the holder, used as the lookup key (not unique)
    pub holder_id: String,

    #[serde(with = "format::date")]
    pub date: NaiveDate,

    pub party_size: u32,

    #[serde(with = "format::time")]
    pub time: NaiveTime,

    pub table_number: u32,
}

impl Reservation {
    /// Two reservations conflict when restaurant, time and party size all match.
    /// The date takes no part in the rule.
    pub fn conflicts_with(&self, other: &Reservation) -> bool {
        self.restaurant_name == other.restaurant_name
            && self.time == other.time
            && self.party_size == other.party_size
    }

    /// Whether the reservation has not yet elapsed at `reference`.
    ///
    /// Future dates always qualify; same-day reservations qualify from the
    /// reference minute onwards. Times are stored to the minute, so the
    /// reference drops its seconds before comparing.
    pub fn is_upcoming(&self, reference: NaiveDateTime) -> bool {
        let today = reference.date();
        let now = reference.time();
        let now = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now);
        self.date > today || (self.date == today && self.time >= now)
    }

    /// Check field constraints before anything is persisted
    pub fn validate(&self) -> Result<()> {
        if self.restaurant_name.trim().is_empty() {
            return Err(BookingError::Validation("restaurant name is required".to_string()));
        }
        if self.holder_id.trim().is_empty() {
            return Err(BookingError::Validation("holder id is required".to_string()));
        }
        if self.party_size == 0 {
            return Err(BookingError::Validation(
                "party size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
