//! Date and time text formats
//!
//! Dates are `dd/mm/YYYY`, times are `HH:MM`, both on disk and at the prompt.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{BookingError, Result};

/// Day-first calendar date
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// 24-hour time of day, minute precision
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a `dd/mm/YYYY` date
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| BookingError::Validation(format!("'{}' is not a date (dd/mm/yyyy)", text.trim())))
}

/// Parse a `HH:MM` time of day
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), TIME_FORMAT)
        .map_err(|_| BookingError::Validation(format!("'{}' is not a time (hh:mm)", text.trim())))
}

pub(crate) mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
