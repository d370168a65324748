//! Tests for the interactive Session
//!
//! These tests verify:
//! - Startup notice of upcoming reservations
//! - Scripted create / list / update / cancel / lookup flows
//! - Invalid choices re-display the menu instead of exiting
//! - Errors end the operation, not the session
//! - Closing input ends the session cleanly

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tablebook::menu::{Painter, Prompter, Session};
use tablebook::model::{Reservation, Restaurant};
use tablebook::storage::{JsonFileCollection, MemoryCollection};
use tablebook::{ReservationStore, RestaurantStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn reservation(restaurant: &str, holder_id: &str, day: u32, hour: u32) -> Reservation {
    Reservation {
        restaurant_name: restaurant.to_string(),
        holder_name: "Ana".to_string(),
        holder_id: holder_id.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
        party_size: 2,
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        table_number: 7,
    }
}

struct Harness {
    reservations: MemoryCollection<Reservation>,
    restaurants: MemoryCollection<Restaurant>,
}

impl Harness {
    fn new(reservations: Vec<Reservation>, restaurants: Vec<Restaurant>) -> Self {
        Self {
            reservations: MemoryCollection::with_records(reservations),
            restaurants: MemoryCollection::with_records(restaurants),
        }
    }

    /// Run a session over `script` and return everything it printed
    fn run(&self, script: &str) -> String {
        let prompter = Prompter::new(script.as_bytes(), Vec::new(), Painter::new(false));
        let mut session = Session::new(
            prompter,
            ReservationStore::new(self.reservations.clone()),
            RestaurantStore::new(self.restaurants.clone()),
        )
        .with_clock(fixed_now);

        session.run().unwrap();
        String::from_utf8(session.prompter().output().clone()).unwrap()
    }
}

// =============================================================================
// Startup Tests
// =============================================================================

#[test]
fn test_startup_lists_upcoming_reservations() {
    let harness = Harness::new(
        vec![reservation("Past", "1", 17, 20), reservation("Tonight", "2", 18, 20)],
        Vec::new(),
    );

    let out = harness.run("3\n");

    assert!(out.contains("Upcoming reservations:"));
    assert!(out.contains("Restaurant: Tonight, Date: 18/10/2026, Time: 20:00"));
    assert!(!out.contains("Restaurant: Past"));
    assert!(out.contains("Exiting..."));
}

#[test]
fn test_startup_without_upcoming() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("3\n");

    assert!(out.contains("No upcoming reservations."));
}

#[test]
fn test_missing_files_report_setup_instruction() {
    let temp_dir = TempDir::new().unwrap();
    let prompter = Prompter::new("1\n2\n6\n3\n".as_bytes(), Vec::new(), Painter::new(false));
    let mut session = Session::new(
        prompter,
        ReservationStore::new(JsonFileCollection::<Reservation>::attach(
            temp_dir.path().join("reservations.json"),
        )),
        RestaurantStore::new(JsonFileCollection::<Restaurant>::attach(
            temp_dir.path().join("restaurants.json"),
        )),
    )
    .with_clock(fixed_now);

    session.run().unwrap();

    let out = String::from_utf8(session.prompter().output().clone()).unwrap();
    assert_eq!(out.matches("Please create it first").count(), 2);
    assert!(out.contains("Exiting..."));
}

// =============================================================================
// Menu Navigation Tests
// =============================================================================

#[test]
fn test_invalid_choice_redisplays_menu() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("9\nabc\n3\n");

    assert_eq!(out.matches("'9' is not a menu option").count(), 1);
    assert_eq!(out.matches("'abc' is not a menu option").count(), 1);
    assert_eq!(out.matches("[MAIN MENU]").count(), 3);
}

#[test]
fn test_end_of_input_ends_session() {
    let harness = Harness::new(Vec::new(), Vec::new());

    // Input closes in the middle of a reservation prompt
    let out = harness.run("1\n1\nSakura\n");

    assert!(out.contains("Name of the person making the reservation?"));
    assert!(harness.reservations.is_empty());
}

// =============================================================================
// Reservation Flow Tests
// =============================================================================

#[test]
fn test_create_reservation_flow() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("1\n1\nSakura\nAna\n12345678900\n25/12/2026\n4\n20:30\n3\n6\n3\n");

    assert!(out.contains("RESERVATION CONFIRMED!"));
    let stored = harness.reservations.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].restaurant_name, "Sakura");
    assert_eq!(stored[0].holder_id, "12345678900");
    assert_eq!(stored[0].party_size, 4);
    assert_eq!(stored[0].table_number, 3);
}

#[test]
fn test_create_reprompts_bad_answers() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("1\n1\nSakura\nAna\n1\n2026-12-25\n25/12/2026\nfour\n4\n8pm\n20:00\n3\n6\n3\n");

    assert!(out.contains("is not a date"));
    assert!(out.contains("'four' is not a whole number"));
    assert!(out.contains("is not a time"));
    assert_eq!(harness.reservations.len(), 1);
}

#[test]
fn test_conflicting_reservation_is_reported_and_menu_continues() {
    let harness = Harness::new(vec![reservation("A", "1", 20, 19)], Vec::new());

    let out = harness.run("1\n1\nA\nBruno\n2\n21/10/2026\n2\n19:00\n5\n2\n6\n3\n");

    assert!(out.contains("That slot is taken."));
    assert_eq!(harness.reservations.len(), 1);
    // Menu kept running: the list after the conflict still printed
    assert!(out.contains("RESERVATIONS:"));
}

#[test]
fn test_list_empty_reservations() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("1\n2\n6\n3\n");

    assert!(out.contains("No reservations yet"));
}

#[test]
fn test_update_and_cancel_flow() {
    let harness = Harness::new(
        vec![reservation("A", "111", 20, 19), reservation("B", "222", 21, 19)],
        Vec::new(),
    );

    let out = harness.run("1\n3\n111\n30/10/2026\n21:00\n4\n222\n4\n999\n6\n3\n");

    assert!(out.contains("Reservation date and time updated."));
    assert!(out.contains("Reservation at B cancelled."));
    assert!(out.contains("no reservation for holder id 999"));

    let stored = harness.reservations.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].date, NaiveDate::from_ymd_opt(2026, 10, 30).unwrap());
    assert_eq!(stored[0].time, NaiveTime::from_hms_opt(21, 0, 0).unwrap());
}

#[test]
fn test_lookup_shows_every_match() {
    let harness = Harness::new(
        vec![reservation("A", "111", 20, 19), reservation("C", "111", 22, 21)],
        Vec::new(),
    );

    let out = harness.run("1\n5\n111\n5\n000\n6\n3\n");

    assert_eq!(out.matches("--- Reservation ---").count(), 2);
    assert!(out.contains("Restaurant: C"));
    assert!(out.contains("Reservation not found."));
}

// =============================================================================
// Restaurant Flow Tests
// =============================================================================

#[test]
fn test_restaurant_add_update_delete_flow() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let script = concat!(
        "2\n",
        "1\nFogo\nSteakhouse\nRua 1\n11-23\n4\n",
        "3\nFogo\n\nChurrascaria\n\n\n5\n",
        "5\nFogo\n",
        "4\nNowhere\n",
        "6\n3\n",
    );
    let out = harness.run(script);

    assert!(out.contains("Restaurant added!"));
    assert!(out.contains("Restaurant updated."));
    assert!(out.contains("Cuisine: Churrascaria"));
    assert!(out.contains("no restaurant named Nowhere"));

    let stored = harness.restaurants.snapshot();
    assert_eq!(
        stored,
        vec![Restaurant {
            name: "Fogo".to_string(),
            cuisine_info: "Churrascaria".to_string(),
            address: "Rua 1".to_string(),
            hours: "11-23".to_string(),
            rating: 5,
        }]
    );
}

#[test]
fn test_restaurant_rating_out_of_range_is_rejected() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("2\n1\nFogo\nSteakhouse\nRua 1\n11-23\n9\n2\n6\n3\n");

    assert!(out.contains("rating must be between 0 and 5"));
    assert!(out.contains("No restaurants registered yet."));
    assert!(harness.restaurants.is_empty());
}

#[test]
fn test_restaurant_large_rating_reports_range() {
    let harness = Harness::new(Vec::new(), Vec::new());

    let out = harness.run("2\n1\nFogo\nSteakhouse\nRua 1\n11-23\n300\n6\n3\n");

    assert!(!out.contains("not a whole number"));
    assert!(out.contains("rating must be between 0 and 5, got 300"));
    assert!(harness.restaurants.is_empty());
}
