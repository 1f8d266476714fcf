//! Action codes: the symbolic choices a player can make.
//!
//! Every code is a small `Copy` enum implementing `MenuOption`, which gives
//! it the single key a console player types and the label shown next to it.
//! The engine only ever compares codes, never keys.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Something an input provider can offer in a menu.
pub trait MenuOption: Copy + Eq + std::fmt::Debug {
    /// The key that selects this option.
    fn key(self) -> char;

    /// Human-readable label.
    fn label(self) -> &'static str;
}

/// Turn menu actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ShowInfo,
    Move,
    Pass,
    ShowMap,
    Quit,
}

impl Action {
    /// Menu order.
    pub const MENU: [Action; 5] = [
        Action::ShowInfo,
        Action::Move,
        Action::Pass,
        Action::ShowMap,
        Action::Quit,
    ];

    /// Whether the action uses up the turn's single move.
    #[must_use]
    pub fn consumes_move(self) -> bool {
        matches!(self, Action::Move)
    }
}

impl MenuOption for Action {
    fn key(self) -> char {
        match self {
            Action::ShowInfo => '1',
            Action::Move => '2',
            Action::Pass => '3',
            Action::ShowMap => '4',
            Action::Quit => 'X',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::ShowInfo => "Display Player Info",
            Action::Move => "Move",
            Action::Pass => "Pass your Turn",
            Action::ShowMap => "Show your position on the map",
            Action::Quit => "Exit and end the current game",
        }
    }
}

/// The one-time starting choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartingPath {
    StartCareer,
    StartEducation,
}

impl StartingPath {
    pub const ALL: [StartingPath; 2] = [StartingPath::StartCareer, StartingPath::StartEducation];
}

impl MenuOption for StartingPath {
    fn key(self) -> char {
        match self {
            StartingPath::StartCareer => '1',
            StartingPath::StartEducation => '2',
        }
    }

    fn label(self) -> &'static str {
        match self {
            StartingPath::StartCareer => "To start a career (and have only a GED to start)",
            StartingPath::StartEducation => "To start college (and be unemployed to start)",
        }
    }
}

/// Binary choice used by every event that asks the player something.
///
/// `Accept` means switch career, pay for education, attempt marriage or
/// try for children; `Decline` means the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Accept,
    Decline,
}

impl Choice {
    pub const BOTH: [Choice; 2] = [Choice::Accept, Choice::Decline];
}

impl MenuOption for Choice {
    fn key(self) -> char {
        match self {
            Choice::Accept => '1',
            Choice::Decline => '2',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Choice::Accept => "Yes",
            Choice::Decline => "No",
        }
    }
}

/// Confirmation for leaving the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confirm {
    Yes,
    No,
}

impl Confirm {
    pub const BOTH: [Confirm; 2] = [Confirm::Yes, Confirm::No];
}

impl MenuOption for Confirm {
    fn key(self) -> char {
        match self {
            Confirm::Yes => 'Y',
            Confirm::No => 'N',
        }
    }

    fn label(self) -> &'static str {
        match self {
            Confirm::Yes => "Yes, end the game",
            Confirm::No => "No, return to the game",
        }
    }
}

/// Find the option whose key matches a line of raw input.
///
/// Surrounding whitespace is ignored and letters match case-insensitively.
#[must_use]
pub fn parse_option<T: MenuOption>(options: &[T], raw: &str) -> Option<T> {
    let mut chars = raw.trim().chars();
    let key = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    options
        .iter()
        .copied()
        .find(|o| o.key().eq_ignore_ascii_case(&key))
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
