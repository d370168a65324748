//! Terminal rendering
//!
//! ANSI color framing for menus and status lines.

use owo_colors::OwoColorize;

use crate::model::{Reservation, Restaurant, DATE_FORMAT, TIME_FORMAT};

const RULE_WIDTH: usize = 55;

/// Formats operator-facing text, with or without color
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Horizontal rule framing a menu
    pub fn rule(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        if self.color {
            rule.cyan().to_string()
        } else {
            rule
        }
    }

    /// Success line
    pub fn ok(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "✓".green(), message.green())
        } else {
            format!("✓ {}", message)
        }
    }

    /// Warning line
    pub fn warn(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "⚠".yellow(), message.yellow())
        } else {
            format!("⚠ {}", message)
        }
    }

    /// Error line
    pub fn error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "✗".red(), message.red())
        } else {
            format!("✗ {}", message)
        }
    }

    /// Section heading
    pub fn heading(&self, title: &str) -> String {
        if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }
}

/// Multi-line description of a reservation
pub fn describe_reservation(r: &Reservation) -> String {
    format!(
        "Restaurant: {}\nName: {}\nHolder id: {}\nDate: {}\nTime: {}\nParty size: {}\nTable: {}",
        r.restaurant_name,
        r.holder_name,
        r.holder_id,
        r.date.format(DATE_FORMAT),
        r.time.format(TIME_FORMAT),
        r.party_size,
        r.table_number,
    )
}

/// Multi-line description of a restaurant
pub fn describe_restaurant(r: &Restaurant) -> String {
    format!(
        "Name: {}\nCuisine: {}\nAddress: {}\nHours: {}\nRating: {}/5",
        r.name, r.cuisine_info, r.address, r.hours, r.rating,
    )
}
