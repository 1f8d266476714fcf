//! Game state: everything one game owns.
//!
//! ## GameState
//!
//! - Configuration, catalog and board (fixed for the game)
//! - The seated players, in turn order
//! - The shared RNG
//! - Turn counter and action history
//!
//! The game loop owns a `GameState` and lends it to the turn engine; there
//! is no other copy of the roster or the board anywhere.

use im::Vector;
use tracing::debug;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::{GameRng, GameRngState};
use crate::board::Board;
use crate::catalog::Catalog;
use crate::setup::{RosterEntry, RosterError};

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Tunables for this game.
    pub config: GameConfig,

    /// Careers, educations and event squares.
    pub catalog: Catalog,

    /// Position lookup derived from the catalog.
    pub board: Board,

    /// Seated players, indexed by seat.
    pub players: PlayerMap<Player>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Turn number (starts at 1, one per player turn).
    pub turn_number: u32,

    /// Action sequence within turn.
    action_sequence: u32,

    /// Every menu action taken, in order.
    pub action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Seat the roster on a board built from `catalog`.
    pub fn new(
        config: GameConfig,
        catalog: Catalog,
        roster: Vec<RosterEntry>,
    ) -> Result<Self, GameError> {
        if roster.is_empty() || roster.len() > 255 {
            return Err(RosterError::EmptyRoster.into());
        }

        let players = PlayerMap::from_vec(
            roster
                .into_iter()
                .map(|entry| Player::new(entry.name, entry.token, &catalog, config.starting_balance))
                .collect(),
        );
        debug!(players = players.player_count(), seed = config.seed, "Created game state");

        Ok(Self {
            board: Board::new(&catalog),
            rng: GameRng::new(config.seed),
            config,
            catalog,
            players,
            turn_number: 1,
            action_sequence: 0,
            action_history: Vector::new(),
        })
    }

    /// A game with the standard catalog.
    pub fn standard(config: GameConfig, roster: Vec<RosterEntry>) -> Result<Self, GameError> {
        Self::new(config, Catalog::standard(), roster)
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Whether every seated player has retired.
    #[must_use]
    pub fn all_retired(&self) -> bool {
        self.players.iter().all(|(_, p)| p.is_retired())
    }

    /// Record an action in history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.action_history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Advance to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Snapshot of the RNG for replaying from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[(&str, char)]) -> Vec<RosterEntry> {
        names
            .iter()
            .map(|&(name, token)| RosterEntry {
                name: name.to_string(),
                token,
            })
            .collect()
    }

    #[test]
    fn test_new_seats_players_in_order() {
        let state =
            GameState::standard(GameConfig::default(), roster(&[("Ada", 'A'), ("Bob", 'B')])).unwrap();

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.player(PlayerId::new(0)).name(), "Ada");
        assert_eq!(state.player(PlayerId::new(1)).token(), 'B');
        assert_eq!(state.turn_number, 1);
        assert!(!state.all_retired());
        assert_eq!(state.board.end(), 36);
    }

    #[test]
    fn test_starting_balance_from_config() {
        let config = GameConfig::default().with_starting_balance(5_000);
        let state = GameState::standard(config, roster(&[("Ada", 'A')])).unwrap();
        assert_eq!(state.player(PlayerId::new(0)).balance(), 5_000);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = GameState::standard(GameConfig::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, GameError::Roster(RosterError::EmptyRoster)));
    }

    #[test]
    fn test_record_action_sequences() {
        let mut state = GameState::standard(GameConfig::default(), roster(&[("Ada", 'A')])).unwrap();
        let p0 = PlayerId::new(0);

        state.record_action(p0, Action::ShowInfo);
        state.record_action(p0, Action::Move);
        state.advance_turn();
        state.record_action(p0, Action::Pass);

        let history: Vec<_> = state.action_history.iter().cloned().collect();
        assert_eq!(history[0], ActionRecord::new(p0, Action::ShowInfo, 1, 0));
        assert_eq!(history[1], ActionRecord::new(p0, Action::Move, 1, 1));
        assert_eq!(history[2], ActionRecord::new(p0, Action::Pass, 2, 0));
    }

    #[test]
    fn test_all_retired() {
        let mut state =
            GameState::standard(GameConfig::default(), roster(&[("Ada", 'A'), ("Bob", 'B')])).unwrap();
        let end = state.board.end();

        state.player_mut(PlayerId::new(0)).advance(end, end);
        assert!(!state.all_retired());
        state.player_mut(PlayerId::new(1)).advance(end, end);
        assert!(state.all_retired());
    }

    #[test]
    fn test_same_seed_same_rng_state() {
        let a = GameState::standard(GameConfig::default().with_seed(7), roster(&[("Ada", 'A')])).unwrap();
        let b = GameState::standard(GameConfig::default().with_seed(7), roster(&[("Ada", 'A')])).unwrap();
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
