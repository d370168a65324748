//! # Tablebook
//!
//! An interactive reservation book for restaurants with:
//! - Conflict checking on (restaurant, time, party size)
//! - Upcoming-reservation filtering against a reference date/time
//! - Restaurant metadata kept alongside reservations
//! - Whole-document JSON persistence behind a storage port
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Menu Session                             │
//! │             (stdin prompts / stdout status)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌──────────────────┐    ┌──────────────────┐
//!   │ ReservationStore │    │ RestaurantStore  │
//!   │ (conflict/filter)│    │   (plain CRUD)   │
//!   └────────┬─────────┘    └────────┬─────────┘
//!            │                       │
//!            ▼                       ▼
//!   ┌─────────────────────────────────────────┐
//!   │        Collection<T> (load / save)       │
//!   │   JsonFileCollection | MemoryCollection  │
//!   └─────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod reservation;
pub mod restaurant;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookingError, Result};
pub use config::Config;
pub use model::{Reservation, Restaurant};
pub use reservation::{Confirmation, ReservationStore};
pub use restaurant::RestaurantStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Tablebook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
