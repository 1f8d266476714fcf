//! Round-robin turn order and game termination.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::turn::{TurnEngine, TurnOutcome, TurnReport};
use crate::core::{GameError, GameState, PlayerId};
use crate::display::describe_retirement;
use crate::io::{InputProvider, OutputSink};

/// Final standing of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub balance: i64,
    pub retired: bool,
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Full passes over the roster that ran at least one turn.
    pub passes: u32,
    /// True when a player quit instead of everyone retiring.
    pub quit: bool,
    /// Players sorted by balance, richest first.
    pub standings: Vec<Standing>,
}

impl GameSummary {
    fn from_state(game: &GameState, passes: u32, quit: bool) -> Self {
        let mut standings: Vec<Standing> = game
            .player_ids()
            .map(|id| {
                let player = game.player(id);
                Standing {
                    player: id,
                    name: player.name().to_string(),
                    balance: player.balance(),
                    retired: player.is_retired(),
                }
            })
            .collect();
        standings.sort_by(|a, b| b.balance.cmp(&a.balance).then(a.player.index().cmp(&b.player.index())));
        Self { passes, quit, standings }
    }

    /// The richest player, if any.
    #[must_use]
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }
}

/// Cycles players in roster order until everyone retires or someone quits.
pub struct GameLoop<'a, I, O> {
    game: &'a mut GameState,
    input: &'a mut I,
    output: &'a mut O,
    reports: Vec<TurnReport>,
}

impl<'a, I: InputProvider, O: OutputSink> GameLoop<'a, I, O> {
    pub fn new(game: &'a mut GameState, input: &'a mut I, output: &'a mut O) -> Self {
        Self {
            game,
            input,
            output,
            reports: Vec::new(),
        }
    }

    /// Turn reports collected so far, in play order.
    #[must_use]
    pub fn reports(&self) -> &[TurnReport] {
        &self.reports
    }

    /// Play one pass over the roster.
    ///
    /// Returns how many players took a turn and whether someone quit.
    /// Retired players are skipped with a notice.
    pub fn play_pass(&mut self) -> Result<(usize, bool), GameError> {
        let ids: Vec<PlayerId> = self.game.player_ids().collect();
        let mut active = 0;

        for id in ids {
            if self.game.player(id).is_retired() {
                self.output
                    .emit(&format!("{} is retired, continuing...", self.game.player(id).name()));
                continue;
            }

            active += 1;
            self.output
                .emit(&format!("It's {}'s turn! ({})", self.game.player(id).name(), id));
            let report = TurnEngine::new().play_turn(self.game, id, self.input, self.output)?;
            let outcome = report.outcome;
            self.reports.push(report);
            self.game.advance_turn();

            if outcome == TurnOutcome::Quit {
                return Ok((active, true));
            }
        }

        Ok((active, false))
    }

    /// Run passes until a pass finds nobody left to play, or a player quits.
    #[instrument(skip_all, fields(players = self.game.player_count()))]
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        let mut passes = 0;

        loop {
            let (active, quit) = self.play_pass()?;
            if active > 0 {
                passes += 1;
            }
            if quit {
                info!(passes, "Game ended by quit");
                return Ok(GameSummary::from_state(self.game, passes, true));
            }
            if active == 0 {
                break;
            }
        }

        debug_assert!(self.game.all_retired());
        self.output.emit("Everyone has retired! Final results:");
        for id in self.game.player_ids() {
            self.output
                .emit(&describe_retirement(self.game.player(id), &self.game.catalog));
        }
        info!(passes, "Game ended with every player retired");
        Ok(GameSummary::from_state(self.game, passes, false))
    }
}
