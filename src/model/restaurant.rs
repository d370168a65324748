//! Restaurant record

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Highest rating a restaurant can carry
pub const MAX_RATING: u32 = 5;

/// Restaurant metadata, keyed by `name` (duplicates allowed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine_info: String,
    pub address: String,
    pub hours: String,
    pub rating: u32,
}

impl Restaurant {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Validation("restaurant name is required".to_string()));
        }
        if self.rating > MAX_RATING {
            return Err(BookingError::Validation(format!(
                "rating must be between 0 and {}, got {}",
                MAX_RATING, self.rating
            )));
        }
        Ok(())
    }
}
