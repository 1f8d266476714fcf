//! One player's turn.
//!
//! ## State machine
//!
//! ```text
//! Uninitialized ──starting draw──▶ AwaitingAction ──Pass──▶ Passed
//!                                   │  ▲   │
//!                         ShowInfo/ │  │   └─Quit+Yes──▶ Quit
//!                          ShowMap  ▼  │
//!                                  Viewing
//!                                   │  ▲
//!                            Move   ▼  │ (move budget spent)
//!                                  Moving
//!                                   │
//!                      reached END  ▼
//!                                  Retired
//! ```
//!
//! A turn allows any number of info/map views and at most one move. A
//! second move is refused with a message and changes nothing. Reaching
//! the end of the track ends the turn with a retirement summary.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Action, Confirm, GameError, GameState, PlayerId, StartingPath};
use crate::display::{describe_map, describe_player, describe_retirement, DIVIDER};
use crate::effects::{EventResolver, Outcome, Resolution};
use crate::io::{InputProvider, OutputSink};

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Uninitialized,
    AwaitingAction,
    Viewing,
    Moving,
    Passed,
    Retired,
    Quit,
}

impl TurnState {
    /// Whether the turn is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Passed | TurnState::Retired | TurnState::Quit)
    }
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Passed,
    Retired,
    /// The player confirmed leaving; the game should stop.
    Quit,
}

/// Everything a single move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Squares moved.
    pub roll: u32,
    pub from: u32,
    pub to: u32,
    /// Whether this move reached the end of the track.
    pub retired: bool,
    /// Events resolved, in the order they fired.
    pub resolutions: Vec<Resolution>,
}

/// Summary of a finished turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    pub outcome: TurnOutcome,
    /// The starting draw, if this was the player's first turn.
    pub starting_draw: Option<Outcome>,
    /// The move, if one was made.
    pub movement: Option<MoveReport>,
}

/// Drives one player's turn through its states.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: TurnState,
    moved: bool,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TurnState::AwaitingAction,
            moved: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Whether this turn's move has been used.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Run a full turn for `id` until it passes, retires or quits.
    #[instrument(skip_all, fields(player = %id, turn = game.turn_number))]
    pub fn play_turn<I: InputProvider, O: OutputSink>(
        &mut self,
        game: &mut GameState,
        id: PlayerId,
        input: &mut I,
        output: &mut O,
    ) -> Result<TurnReport, GameError> {
        self.moved = false;
        let mut starting_draw = None;
        let mut movement = None;

        if !game.player(id).is_initialized() {
            self.state = TurnState::Uninitialized;
            starting_draw = Some(self.start(game, id, input, output)?);
        }
        self.state = TurnState::AwaitingAction;

        while !self.state.is_terminal() {
            if game.player(id).is_retired() {
                self.state = TurnState::Retired;
                output.emit(&describe_retirement(game.player(id), &game.catalog));
                break;
            }

            let action = input.request_choice("Input the action you would like to complete:", &Action::MENU)?;
            game.record_action(id, action);
            debug!(?action, "Player chose action");

            match action {
                Action::ShowInfo => {
                    self.state = TurnState::Viewing;
                    output.emit(&describe_player(game.player(id), &game.catalog));
                }
                Action::ShowMap => {
                    self.state = TurnState::Viewing;
                    output.emit(&describe_map(&game.board, game.player(id)));
                }
                Action::Move if self.moved => {
                    output.emit("You've already moved!");
                }
                Action::Move => {
                    self.state = TurnState::Moving;
                    movement = Some(self.roll_and_move(game, id, input, output)?);
                }
                Action::Pass => {
                    self.state = TurnState::Passed;
                }
                Action::Quit => {
                    if input.request_choice("Are you sure you would like to exit the game?", &Confirm::BOTH)?
                        == Confirm::Yes
                    {
                        output.emit("Thank you for playing!");
                        self.state = TurnState::Quit;
                    } else {
                        output.emit("Returning to game...");
                    }
                }
            }

            if !self.state.is_terminal() {
                self.state = TurnState::AwaitingAction;
            }
        }

        let outcome = match self.state {
            TurnState::Retired => TurnOutcome::Retired,
            TurnState::Quit => TurnOutcome::Quit,
            _ => TurnOutcome::Passed,
        };
        if outcome != TurnOutcome::Quit {
            output.emit("Passing the turn");
        }
        info!(?outcome, "Turn finished");

        Ok(TurnReport {
            player: id,
            outcome,
            starting_draw,
            movement,
        })
    }

    /// The one-time starting choice and draw.
    fn start<I: InputProvider, O: OutputSink>(
        &mut self,
        game: &mut GameState,
        id: PlayerId,
        input: &mut I,
        output: &mut O,
    ) -> Result<Outcome, GameError> {
        let path = input.request_choice("Choose the path you want to start:", &StartingPath::ALL)?;

        let player = &mut game.players[id];
        let mut resolver = EventResolver::new(&game.catalog, &game.config, &mut game.rng, input, output);
        let outcome = resolver.resolve_starting_path(path, player)?;
        player.mark_initialized();

        output.emit("You are now ready to begin your journey!");
        Ok(outcome)
    }

    /// Roll the die and move by the result.
    fn roll_and_move<I: InputProvider, O: OutputSink>(
        &mut self,
        game: &mut GameState,
        id: PlayerId,
        input: &mut I,
        output: &mut O,
    ) -> Result<MoveReport, GameError> {
        input.request_any_key("Press enter to roll the die")?;
        let roll = game.rng.roll_die(game.config.die_sides);
        output.emit(&format!("Rolling die!\n{roll}!"));

        let report = self.move_by(game, id, roll, input, output)?;
        Ok(report)
    }

    /// Move `id` forward by `distance` and resolve every event crossed.
    ///
    /// Consumes the turn's move. Squares resolve in ascending position
    /// order; kinds sharing a square resolve in `EventKind` order.
    pub fn move_by<I: InputProvider, O: OutputSink>(
        &mut self,
        game: &mut GameState,
        id: PlayerId,
        distance: u32,
        input: &mut I,
        output: &mut O,
    ) -> Result<MoveReport, GameError> {
        self.moved = true;
        let end = game.board.end();
        let player = &mut game.players[id];
        let step = player.advance(distance, end);

        if step.capped {
            output.emit(&format!("{} has reached the end of the game!", player.name()));
        } else {
            output.emit(&format!("{} has reached position {}", player.name(), step.to));
        }
        debug!(from = step.from, to = step.to, retired = step.capped, "Moved");

        let crossed = game.board.crossed_events(step.from, step.to);
        let mut resolver = EventResolver::new(&game.catalog, &game.config, &mut game.rng, input, output);
        let mut resolutions = Vec::with_capacity(crossed.len());
        for (position, kind) in crossed {
            let outcome = resolver.resolve(kind, player)?;
            debug!(position, ?kind, changed = outcome.changed_player(), "Square resolved");
            resolutions.push(Resolution {
                position,
                kind,
                outcome,
            });
        }
        if !resolutions.is_empty() {
            output.emit(DIVIDER);
        }

        Ok(MoveReport {
            roll: distance,
            from: step.from,
            to: step.to,
            retired: step.capped,
            resolutions,
        })
    }
}
