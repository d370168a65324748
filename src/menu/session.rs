//! Menu session
//!
//! Drives the nested menu loop. Each action performs one full
//! load-mutate-save cycle through a store and returns to its menu.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::error::{BookingError, Result};
use crate::model::{Reservation, Restaurant, DATE_FORMAT, TIME_FORMAT};
use crate::reservation::ReservationStore;
use crate::restaurant::RestaurantStore;
use crate::storage::Collection;

use super::choice::{MainChoice, MenuChoice, ReservationChoice, RestaurantChoice};
use super::prompt::{is_end_of_input, Prompter};
use super::render::{describe_reservation, describe_restaurant};

/// Source of the reference date/time for "upcoming"
pub type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Whether a submenu loop should keep going
enum Flow {
    Stay,
    Leave,
}

/// An interactive session over both stores
pub struct Session<R, W, RC, SC> {
    prompter: Prompter<R, W>,
    reservations: ReservationStore<RC>,
    restaurants: RestaurantStore<SC>,
    clock: Clock,
}

impl<R, W, RC, SC> Session<R, W, RC, SC>
where
    R: BufRead,
    W: Write,
    RC: Collection<Reservation>,
    SC: Collection<Restaurant>,
{
    /// Create a session reading the wall clock for "upcoming"
    pub fn new(
        prompter: Prompter<R, W>,
        reservations: ReservationStore<RC>,
        restaurants: RestaurantStore<SC>,
    ) -> Self {
        Self {
            prompter,
            reservations,
            restaurants,
            clock: Box::new(|| Local::now().naive_local()),
        }
    }

    /// Replace the clock (fixed times in tests)
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run until the operator exits or input ends
    ///
    /// Operation errors are reported and the menu is shown again; only a
    /// failure to write to the terminal ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        match self.main_loop() {
            Err(e) if is_end_of_input(&e) => {
                tracing::debug!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    /// Get the prompter (output inspection in tests)
    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    // =========================================================================
    // Menu Loops
    // =========================================================================

    fn main_loop(&mut self) -> Result<()> {
        self.notify_upcoming()?;

        loop {
            match self.choose::<MainChoice>()? {
                Some(MainChoice::Reservations) => self.reservation_loop()?,
                Some(MainChoice::Restaurants) => self.restaurant_loop()?,
                Some(MainChoice::Exit) => {
                    self.prompter.say("Exiting...")?;
                    return Ok(());
                }
                None => {}
            }
        }
    }

    fn reservation_loop(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.choose::<ReservationChoice>()? else {
                continue;
            };
            let outcome = match choice {
                ReservationChoice::Create => self.create_reservation(),
                ReservationChoice::List => self.list_reservations(),
                ReservationChoice::Update => self.update_reservation(),
                ReservationChoice::Cancel => self.cancel_reservation(),
                ReservationChoice::Lookup => self.lookup_reservations(),
                ReservationChoice::Back => Ok(Flow::Leave),
            };
            if let Flow::Leave = self.settle(outcome)? {
                self.prompter.say("Back to the previous menu...")?;
                return Ok(());
            }
        }
    }

    fn restaurant_loop(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.choose::<RestaurantChoice>()? else {
                continue;
            };
            let outcome = match choice {
                RestaurantChoice::Create => self.create_restaurant(),
                RestaurantChoice::List => self.list_restaurants(),
                RestaurantChoice::Update => self.update_restaurant(),
                RestaurantChoice::Delete => self.delete_restaurant(),
                RestaurantChoice::Lookup => self.lookup_restaurants(),
                RestaurantChoice::Back => Ok(Flow::Leave),
            };
            if let Flow::Leave = self.settle(outcome)? {
                self.prompter.say("Back to the previous menu...")?;
                return Ok(());
            }
        }
    }

    /// Show a menu and read one choice; `None` after reporting a bad answer
    fn choose<M: MenuChoice>(&mut self) -> Result<Option<M>> {
        let painter = self.prompter.painter();
        self.prompter.say(&painter.rule())?;
        self.prompter.say(&painter.heading(&format!("[{}]", M::TITLE)))?;
        for (i, (_, label)) in M::ENTRIES.iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, label))?;
        }
        self.prompter.say(&painter.rule())?;

        let answer = self.prompter.text("CHOOSE AN OPTION:")?;
        match M::parse(&answer) {
            Ok(choice) => Ok(Some(choice)),
            Err(e) => {
                self.prompter.say(&painter.error(&format!("{}, try again", e)))?;
                Ok(None)
            }
        }
    }

    /// Report an operation error and stay in the menu; end of input and
    /// terminal failures propagate
    fn settle(&mut self, outcome: Result<Flow>) -> Result<Flow> {
        let error = match outcome {
            Ok(flow) => return Ok(flow),
            Err(e) if is_end_of_input(&e) => return Err(e),
            Err(e) => e,
        };

        if error.is_recoverable() {
            tracing::debug!(error = %error, "Operation rejected");
        } else {
            tracing::error!(error = %error, "Operation failed");
        }

        let painter = self.prompter.painter();
        let line = match &error {
            BookingError::Conflict { .. } => painter.error(&format!(
                "That slot is taken. {}",
                error
            )),
            BookingError::StorageUnavailable { path } => painter.warn(&format!(
                "File {} not found. Please create it first (run with --init).",
                path.display()
            )),
            _ => painter.error(&error.to_string()),
        };
        self.prompter.say(&line)?;
        Ok(Flow::Stay)
    }

    // =========================================================================
    // Reservation Actions
    // =========================================================================

    fn notify_upcoming(&mut self) -> Result<()> {
        let now = (self.clock)();
        let outcome = self.reservations.upcoming(now).map(|upcoming| {
            if upcoming.is_empty() {
                vec!["No upcoming reservations.".to_string()]
            } else {
                let mut lines = vec!["Upcoming reservations:".to_string()];
                lines.extend(upcoming.iter().map(|r| {
                    format!(
                        "Restaurant: {}, Date: {}, Time: {}",
                        r.restaurant_name,
                        r.date.format(DATE_FORMAT),
                        r.time.format(TIME_FORMAT)
                    )
                }));
                lines
            }
        });

        match outcome {
            Ok(lines) => {
                for line in lines {
                    self.prompter.say(&line)?;
                }
                Ok(())
            }
            Err(e) => self.settle(Err(e)).map(|_| ()),
        }
    }

    fn create_reservation(&mut self) -> Result<Flow> {
        let reservation = Reservation {
            restaurant_name: self.prompter.required("Restaurant name?")?,
            holder_name: self.prompter.required("Name of the person making the reservation?")?,
            holder_id: self.prompter.required("Tax id (CPF)?")?,
            date: self.prompter.date("Date of the reservation (dd/mm/yyyy)?")?,
            party_size: self.prompter.number("How many people?")?,
            time: self.prompter.time("Time (hh:mm)?")?,
            table_number: self.prompter.number("Table number?")?,
        };

        let confirmation = self.reservations.create(reservation)?;
        let r = &confirmation.reservation;
        let painter = self.prompter.painter();
        self.prompter.say(&painter.ok("RESERVATION CONFIRMED!"))?;
        self.prompter.say(&format!(
            "Restaurant: {}\nDate: {}\nTime: {}\nTable: {}\nPeople: {}",
            r.restaurant_name,
            r.date.format(DATE_FORMAT),
            r.time.format(TIME_FORMAT),
            r.table_number,
            r.party_size
        ))?;
        Ok(Flow::Stay)
    }

    fn list_reservations(&mut self) -> Result<Flow> {
        let reservations = self.reservations.list_all()?;
        if reservations.is_empty() {
            self.prompter
                .say("No reservations yet, every time slot is available.")?;
            return Ok(Flow::Stay);
        }

        self.prompter.say("RESERVATIONS:")?;
        for r in &reservations {
            self.prompter.say(&"*".repeat(35))?;
            self.prompter.say(&format!(
                "Restaurant: {}\nDate: {}\nTime: {}\nTable: {}",
                r.restaurant_name,
                r.date.format(DATE_FORMAT),
                r.time.format(TIME_FORMAT),
                r.table_number
            ))?;
        }
        self.prompter.say(&"*".repeat(35))?;
        Ok(Flow::Stay)
    }

    fn update_reservation(&mut self) -> Result<Flow> {
        let holder_id = self.prompter.required("Tax id on the reservation?")?;
        let new_date = self.prompter.date("New date (dd/mm/yyyy)?")?;
        let new_time = self.prompter.time("New time (hh:mm)?")?;

        self.reservations.update(&holder_id, new_date, new_time)?;
        let painter = self.prompter.painter();
        self.prompter
            .say(&painter.ok("Reservation date and time updated."))?;
        Ok(Flow::Stay)
    }

    fn cancel_reservation(&mut self) -> Result<Flow> {
        let holder_id = self.prompter.required("Tax id on the reservation?")?;

        let removed = self.reservations.cancel(&holder_id)?;
        let painter = self.prompter.painter();
        self.prompter.say(&painter.ok(&format!(
            "Reservation at {} cancelled.",
            removed.restaurant_name
        )))?;
        Ok(Flow::Stay)
    }

    fn lookup_reservations(&mut self) -> Result<Flow> {
        let holder_id = self.prompter.required("Tax id on the reservation?")?;

        let found = self.reservations.find_by_holder(&holder_id)?;
        if found.is_empty() {
            let painter = self.prompter.painter();
            self.prompter.say(&painter.warn("Reservation not found."))?;
            return Ok(Flow::Stay);
        }
        for r in &found {
            self.prompter.say("--- Reservation ---")?;
            self.prompter.say(&describe_reservation(r))?;
        }
        Ok(Flow::Stay)
    }

    // =========================================================================
    // Restaurant Actions
    // =========================================================================

    fn create_restaurant(&mut self) -> Result<Flow> {
        let restaurant = Restaurant {
            name: self.prompter.required("Restaurant name?")?,
            cuisine_info: self
                .prompter
                .text("Kind of menu (steakhouse, japanese, ...)?")?,
            address: self.prompter.text("Address?")?,
            hours: self.prompter.text("Opening hours?")?,
            rating: self.prompter.number("Rating (0-5)?")?,
        };

        self.restaurants.create(restaurant)?;
        let painter = self.prompter.painter();
        self.prompter.say(&painter.ok("Restaurant added!"))?;
        Ok(Flow::Stay)
    }

    fn list_restaurants(&mut self) -> Result<Flow> {
        let restaurants = self.restaurants.list_all()?;
        if restaurants.is_empty() {
            self.prompter.say("No restaurants registered yet.")?;
            return Ok(Flow::Stay);
        }

        self.prompter.say("RESTAURANTS:")?;
        for r in &restaurants {
            self.prompter.say(&"*".repeat(35))?;
            self.prompter.say(&describe_restaurant(r))?;
        }
        self.prompter.say(&"*".repeat(35))?;
        Ok(Flow::Stay)
    }

    fn update_restaurant(&mut self) -> Result<Flow> {
        let name = self.prompter.required("Name of the restaurant to update?")?;
        let Some(current) = self.restaurants.find_by_name(&name)?.into_iter().next() else {
            return Err(BookingError::NotFound(format!("no restaurant named {}", name)));
        };

        self.prompter
            .say("Leave a field blank to keep its current value.")?;
        let replacement = Restaurant {
            name: self
                .prompter
                .optional(&format!("New name [{}]?", current.name))?
                .unwrap_or(current.name),
            cuisine_info: self
                .prompter
                .optional(&format!("New cuisine [{}]?", current.cuisine_info))?
                .unwrap_or(current.cuisine_info),
            address: self
                .prompter
                .optional(&format!("New address [{}]?", current.address))?
                .unwrap_or(current.address),
            hours: self
                .prompter
                .optional(&format!("New opening hours [{}]?", current.hours))?
                .unwrap_or(current.hours),
            rating: self
                .prompter
                .optional_number(&format!("New rating [{}]?", current.rating))?
                .unwrap_or(current.rating),
        };

        self.restaurants.update(&name, replacement)?;
        let painter = self.prompter.painter();
        self.prompter.say(&painter.ok("Restaurant updated."))?;
        Ok(Flow::Stay)
    }

    fn delete_restaurant(&mut self) -> Result<Flow> {
        let name = self
            .prompter
            .required("Name of the restaurant to remove?")?;

        self.restaurants.delete(&name)?;
        let painter = self.prompter.painter();
        self.prompter.say(&painter.ok("Restaurant removed."))?;
        Ok(Flow::Stay)
    }

    fn lookup_restaurants(&mut self) -> Result<Flow> {
        let name = self.prompter.required("Restaurant name?")?;

        let found = self.restaurants.find_by_name(&name)?;
        if found.is_empty() {
            let painter = self.prompter.painter();
            self.prompter.say(&painter.warn("Restaurant not found."))?;
            return Ok(Flow::Stay);
        }
        for r in &found {
            self.prompter.say(&describe_restaurant(r))?;
        }
        Ok(Flow::Stay)
    }
}
