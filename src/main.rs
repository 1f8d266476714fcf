//! Life Track - terminal entry point.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use life_track::core::{GameError, GameState};
use life_track::display::DIVIDER;
use life_track::io::{ConsoleInput, ConsoleOutput, OutputSink};
use life_track::rules::GameLoop;
use life_track::setup::edit_roster;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::InputClosed { prompt }) => {
            info!(%prompt, "Input closed, leaving the game");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Game aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Seat the players and play until everyone retires or someone quits.
fn run(cli: &Cli) -> Result<(), GameError> {
    let mut input = ConsoleInput::stdio();
    let mut output = ConsoleOutput::stdout();

    output.emit("Welcome to a Game of Life!");

    let roster = match cli.roster()? {
        Some(roster) => roster,
        None => match edit_roster(&mut input, &mut output)? {
            Some(roster) => roster,
            None => return Ok(()),
        },
    };

    let mut game = GameState::standard(cli.config(), roster)?;
    info!(seed = game.config.seed, players = game.player_count(), "Starting game");

    let summary = GameLoop::new(&mut game, &mut input, &mut output).run()?;

    if !summary.quit {
        output.emit(DIVIDER);
        for (rank, standing) in summary.standings.iter().enumerate() {
            output.emit(&format!("{}. {} with ${}", rank + 1, standing.name, standing.balance));
        }
        output.emit("All players are retired! Thank you for playing!");
    }
    Ok(())
}
