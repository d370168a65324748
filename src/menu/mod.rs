//! Menu Module
//!
//! The interactive text front end over both stores.
//!
//! ## Layout
//! ```text
//! Main                 Reservations            Restaurants
//! 1 Reservations ───▶  1 Create                1 Create
//! 2 Restaurants ──┐    2 List                  2 List
//! 3 Exit          │    3 Update date/time      3 Update
//!                 │    4 Cancel                4 Delete
//!                 │    5 Lookup by holder id   5 Lookup by name
//!                 │    6 Back                  6 Back
//!                 └──────────────────────────▶
//! ```
//! Invalid choices print an error and redisplay the menu. Errors end the
//! current operation only; closing standard input ends the session.

mod choice;
mod prompt;
mod render;
mod session;

pub use choice::{MainChoice, MenuChoice, ReservationChoice, RestaurantChoice};
pub use prompt::Prompter;
pub use render::Painter;
pub use session::Session;
