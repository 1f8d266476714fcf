//! Pre-game setup: building the roster that seats the players.

pub mod roster;
pub mod editor;

pub use roster::{parse_token, Roster, RosterEntry, RosterError};
pub use editor::{edit_roster, RosterCommand};
