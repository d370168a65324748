//! Model Module
//!
//! Records kept in the backing documents.
//!
//! ## Canonical Schema
//! ```text
//! Reservation                      Restaurant
//! ┌──────────────────┬─────────┐   ┌──────────────┬────────┐
//! │ restaurant_name  │ string  │   │ name         │ string │
//! │ holder_name      │ string  │   │ cuisine_info │ string │
//! │ holder_id        │ string  │   │ address      │ string │
//! │ date             │ dd/mm/Y │   │ hours        │ string │
//! │ party_size       │ u32 > 0 │   │ rating       │ 0..=5  │
//! │ time             │ HH:MM   │   └──────────────┴────────┘
//! │ table_number     │ u32     │
//! └──────────────────┴─────────┘
//! ```

mod format;
mod reservation;
mod restaurant;

pub use format::{parse_date, parse_time, DATE_FORMAT, TIME_FORMAT};
pub use reservation::Reservation;
pub use restaurant::{Restaurant, MAX_RATING};
