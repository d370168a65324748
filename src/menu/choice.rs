//! Menu choices
//!
//! Maps the operator's numeric answer onto a menu entry.

use crate::error::{BookingError, Result};

/// A numbered menu
pub trait MenuChoice: Sized + Copy + 'static {
    /// Heading printed above the entries
    const TITLE: &'static str;

    /// Entries in display order, numbered from 1
    const ENTRIES: &'static [(Self, &'static str)];

    /// Parse the operator's answer
    fn parse(answer: &str) -> Result<Self> {
        let answer = answer.trim();
        answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ENTRIES.get(i))
            .map(|(choice, _)| *choice)
            .ok_or_else(|| BookingError::Validation(format!("'{}' is not a menu option", answer)))
    }
}

/// Top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Reservations,
    Restaurants,
    Exit,
}

impl MenuChoice for MainChoice {
    const TITLE: &'static str = "MAIN MENU";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (MainChoice::Reservations, "RESERVATIONS"),
        (MainChoice::Restaurants, "RESTAURANTS"),
        (MainChoice::Exit, "EXIT"),
    ];
}

/// Reservation submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationChoice {
    Create,
    List,
    Update,
    Cancel,
    Lookup,
    Back,
}

impl MenuChoice for ReservationChoice {
    const TITLE: &'static str = "RESERVATIONS";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (ReservationChoice::Create, "MAKE A RESERVATION"),
        (ReservationChoice::List, "LIST RESERVATIONS"),
        (ReservationChoice::Update, "CHANGE RESERVATION DATE/TIME"),
        (ReservationChoice::Cancel, "CANCEL RESERVATION"),
        (ReservationChoice::Lookup, "CHECK MY RESERVATION"),
        (ReservationChoice::Back, "BACK"),
    ];
}

/// Restaurant submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantChoice {
    Create,
    List,
    Update,
    Delete,
    Lookup,
    Back,
}

impl MenuChoice for RestaurantChoice {
    const TITLE: &'static str = "RESTAURANTS";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (RestaurantChoice::Create, "ADD RESTAURANT"),
        (RestaurantChoice::List, "LIST RESTAURANTS"),
        (RestaurantChoice::Update, "UPDATE RESTAURANT"),
        (RestaurantChoice::Delete, "DELETE RESTAURANT"),
        (RestaurantChoice::Lookup, "FIND RESTAURANT"),
        (RestaurantChoice::Back, "BACK"),
    ];
}
