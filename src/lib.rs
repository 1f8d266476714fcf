//! # life-track
//!
//! A turn-based board game of life choices. Players walk a snaking
//! 36-square track, drawing careers and education, collecting paydays,
//! marrying and raising children, until they retire at the end.
//!
//! ## Design Principles
//!
//! 1. **Data-driven content**: careers, educations and event squares live
//!    in a `Catalog`. The board and resolvers only read from it.
//!
//! 2. **Owned state**: `GameState` owns every player and the shared RNG.
//!    Resolvers borrow what they need for the length of one move.
//!
//! 3. **Pluggable I/O**: all prompts go through `InputProvider` and all
//!    narrative through `OutputSink`, so games can be scripted in tests.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration, errors
//! - `catalog`: careers, educations and event squares
//! - `board`: the track and its squares
//! - `effects`: event resolution
//! - `rules`: turn engine and game loop
//! - `io`: console and scripted input/output
//! - `display`: descriptions and the map
//! - `setup`: roster editing

pub mod core;
pub mod catalog;
pub mod board;
pub mod effects;
pub mod rules;
pub mod io;
pub mod display;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Choice, Confirm, GameConfig, GameError, GameRng, GameRngState,
    GameState, MenuOption, Player, PlayerId, PlayerMap, StartingPath,
};

pub use crate::catalog::{
    Career, CareerId, Catalog, CatalogBuilder, Education, EducationId, EventKind, EventSquare,
};

pub use crate::board::Board;

pub use crate::effects::{EventResolver, Outcome, Resolution};

pub use crate::rules::{GameLoop, GameSummary, MoveReport, TurnEngine, TurnOutcome, TurnReport};

pub use crate::io::{ConsoleInput, ConsoleOutput, InputProvider, OutputSink, RecordingSink, ScriptedInput};

pub use crate::setup::{edit_roster, Roster, RosterEntry, RosterError};
