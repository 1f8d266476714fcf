//! Roster editing before the game begins.
//!
//! Players are added by name with a single-letter map token and can be
//! removed by name until the roster is finalized. Finalizing is the only
//! way to get entries out, so a started game always has a valid roster.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A player waiting to be seated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub token: char,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, token: char) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }
}

/// Why a roster edit was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RosterError {
    /// The name was empty or only whitespace.
    #[display("Not a valid player name, no player was added")]
    BlankName,

    /// A player with this name is already seated.
    #[display("{} is already playing", _0)]
    DuplicateName(String),

    /// Tokens must be one alphabetic character.
    #[display("Your token must be a single alphabet letter, got {:?}", _0)]
    InvalidToken(String),

    /// Another player already uses this token.
    #[display("Token {} is already taken", _0)]
    DuplicateToken(char),

    /// No player has this name.
    #[display("{} not found, try again (names are case sensitive)", _0)]
    UnknownPlayer(String),

    /// A game needs at least one player.
    #[display("Cannot begin without players")]
    EmptyRoster,
}

impl std::error::Error for RosterError {}

/// Parse a token string into the single letter it must be.
pub fn parse_token(raw: &str) -> Result<char, RosterError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(RosterError::InvalidToken(trimmed.to_string())),
    }
}

/// The players signed up so far, in seat order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Names are trimmed and compared case-sensitively.
    pub fn add(&mut self, name: &str, token: char) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }
        if !token.is_alphabetic() {
            return Err(RosterError::InvalidToken(token.to_string()));
        }
        if self.entries.iter().any(|e| e.name == name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        if self.entries.iter().any(|e| e.token == token) {
            return Err(RosterError::DuplicateToken(token));
        }
        debug!(name, %token, "Added player to roster");
        self.entries.push(RosterEntry {
            name: name.to_string(),
            token,
        });
        Ok(())
    }

    /// Remove a player by exact name.
    pub fn remove(&mut self, name: &str) -> Result<RosterEntry, RosterError> {
        let name = name.trim();
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| RosterError::UnknownPlayer(name.to_string()))?;
        debug!(name, "Removed player from roster");
        Ok(self.entries.remove(index))
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lock the roster in. Fails if nobody signed up.
    pub fn finalize(self) -> Result<Vec<RosterEntry>, RosterError> {
        if self.entries.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        Ok(self.entries)
    }
}
