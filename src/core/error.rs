//! Error types.
//!
//! Nothing inside the rules can fail: bad menu input is re-prompted and
//! illegal actions are reported as narrative. What can fail is the world
//! around the rules: the input stream closing, the terminal erroring, or
//! a roster that cannot start a game.

use crate::setup::RosterError;

/// Errors that stop a game from continuing.
#[derive(Debug, derive_more::Display)]
pub enum GameError {
    /// The input provider has no more input to give.
    #[display("Input closed while waiting for: {}", prompt)]
    InputClosed { prompt: String },

    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The roster is not valid for starting a game.
    #[display("Invalid roster: {}", _0)]
    Roster(RosterError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InputClosed { .. } => None,
            GameError::Io(err) => Some(err),
            GameError::Roster(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<RosterError> for GameError {
    fn from(err: RosterError) -> Self {
        GameError::Roster(err)
    }
}

impl GameError {
    /// Input ran out while `prompt` was waiting.
    #[must_use]
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        GameError::InputClosed {
            prompt: prompt.into(),
        }
    }
}
