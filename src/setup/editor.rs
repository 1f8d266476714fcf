//! Interactive roster editing before the first turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::roster::{parse_token, Roster, RosterEntry, RosterError};
use crate::core::{Confirm, GameError, MenuOption};
use crate::display::DIVIDER;
use crate::io::{InputProvider, OutputSink};

/// Roster editor menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterCommand {
    AddPlayer,
    RemovePlayer,
    Begin,
    Quit,
}

impl RosterCommand {
    pub const MENU: [RosterCommand; 4] = [
        RosterCommand::AddPlayer,
        RosterCommand::RemovePlayer,
        RosterCommand::Begin,
        RosterCommand::Quit,
    ];
}

impl MenuOption for RosterCommand {
    fn key(self) -> char {
        match self {
            RosterCommand::AddPlayer => '1',
            RosterCommand::RemovePlayer => '2',
            RosterCommand::Begin => '0',
            RosterCommand::Quit => 'X',
        }
    }

    fn label(self) -> &'static str {
        match self {
            RosterCommand::AddPlayer => "To Add Player",
            RosterCommand::RemovePlayer => "To Remove Player",
            RosterCommand::Begin => "To Begin",
            RosterCommand::Quit => "To End",
        }
    }
}

/// Run the roster menu until the players are confirmed.
///
/// Returns `None` if the user quits before the game begins.
pub fn edit_roster<I: InputProvider, O: OutputSink>(
    input: &mut I,
    output: &mut O,
) -> Result<Option<Vec<RosterEntry>>, GameError> {
    let mut roster = Roster::new();

    loop {
        match input.request_choice("Choose action:", &RosterCommand::MENU)? {
            RosterCommand::AddPlayer => {
                let name = input.request_text("Input new player name:")?;
                let token = input.request_text("Choose a letter to represent your character:")?;
                match parse_token(&token).and_then(|token| roster.add(&name, token)) {
                    Ok(()) => output.emit(&format!("Added player {}", name.trim())),
                    Err(err) => {
                        debug!(%err, "Roster edit refused");
                        output.emit(&err.to_string());
                    }
                }
            }
            RosterCommand::RemovePlayer => {
                output.emit(&format!("Current players: {}", names(&roster)));
                let name = input.request_text("Input player to be removed:")?;
                match roster.remove(&name) {
                    Ok(entry) => output.emit(&format!("{} removed", entry.name)),
                    Err(err) => output.emit(&err.to_string()),
                }
            }
            RosterCommand::Begin => {
                if roster.is_empty() {
                    output.emit(&RosterError::EmptyRoster.to_string());
                } else {
                    output.emit(&format!(
                        "Are you sure you want to start with the following players? {}\n\
                         This cannot be changed once the game has begun.",
                        names(&roster)
                    ));
                    if input.request_choice("Confirm?", &Confirm::BOTH)? == Confirm::Yes {
                        let entries = roster.finalize()?;
                        info!(players = entries.len(), "Roster confirmed");
                        return Ok(Some(entries));
                    }
                    output.emit("Returning to editing");
                }
            }
            RosterCommand::Quit => {
                if input.request_choice("Are you sure you would like to exit the game?", &Confirm::BOTH)?
                    == Confirm::Yes
                {
                    output.emit("Thank you for playing!");
                    return Ok(None);
                }
                output.emit("Returning to game...");
            }
        }
        output.emit(DIVIDER);
    }
}

fn names(roster: &Roster) -> String {
    roster
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
