//! Turn flow and game termination.
//!
//! `TurnEngine` runs one player's turn as a small state machine.
//! `GameLoop` cycles players in roster order until everyone has retired
//! or someone quits.

pub mod turn;
pub mod game_loop;

pub use turn::{MoveReport, TurnEngine, TurnOutcome, TurnReport, TurnState};
pub use game_loop::{GameLoop, GameSummary, Standing};
