//! Error types for Tablebook
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use chrono::NaiveTime;
use thiserror::Error;

/// Result type alias using BookingError
pub type Result<T> = std::result::Result<T, BookingError>;

/// Unified error type for Tablebook operations
#[derive(Debug, Error)]
pub enum BookingError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage unavailable: {} does not exist, run with --init to create it", .path.display())]
    StorageUnavailable { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error(
        "Reservation conflict: {restaurant_name} is already booked at {} for {party_size} people",
        .time.format("%H:%M")
    )]
    Conflict {
        restaurant_name: String,
        time: NaiveTime,
        party_size: u32,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookingError {
    /// Whether the error leaves the backing store untouched and the
    /// operator can simply try again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BookingError::Io(_) | BookingError::Serialization(_))
    }
}
