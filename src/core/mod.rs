//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything here is independent of how the game is presented.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Advance, Credential, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{parse_option, Action, ActionRecord, Choice, Confirm, MenuOption, StartingPath};
pub use state::GameState;
pub use error::GameError;
