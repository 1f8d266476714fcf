//! Command-line interface for life-track.

use clap::Parser;
use life_track::core::GameConfig;
use life_track::setup::{parse_token, Roster, RosterEntry, RosterError};

/// Life Track - a board game of careers, college, marriage and kids
#[derive(Parser, Debug)]
#[command(name = "life-track")]
#[command(about = "Play a turn-based game of life in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the die and card draws
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Money every player starts with
    #[arg(long, default_value_t = life_track::catalog::STANDARD_STARTING_BALANCE)]
    pub starting_balance: i64,

    /// Sides on the movement die
    #[arg(long, default_value_t = 6)]
    pub die_sides: u32,

    /// Seat a player as NAME:T, where T is their map letter (repeatable).
    /// Without this the interactive roster editor runs.
    #[arg(short, long = "player", value_name = "NAME:T")]
    pub players: Vec<String>,
}

impl Cli {
    /// Game settings from the flags.
    pub fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_seed(self.seed)
            .with_starting_balance(self.starting_balance)
            .with_die_sides(self.die_sides)
    }

    /// The roster given with `--player`, or `None` if there was none.
    pub fn roster(&self) -> Result<Option<Vec<RosterEntry>>, RosterError> {
        if self.players.is_empty() {
            return Ok(None);
        }

        let mut roster = Roster::new();
        for arg in &self.players {
            let (name, token) = arg.rsplit_once(':').unwrap_or((arg.as_str(), ""));
            roster.add(name, parse_token(token)?)?;
        }
        roster.finalize().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("life-track").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        let config = cli.config();

        assert_eq!(config.seed, 42);
        assert_eq!(config.starting_balance, 100_000);
        assert_eq!(config.die_sides, 6);
        assert_eq!(cli.roster().unwrap(), None);
    }

    #[test]
    fn test_players_from_flags() {
        let cli = parse(&["--seed", "9", "-p", "Ada:A", "--player", "Bo:B"]);
        let roster = cli.roster().unwrap().unwrap();

        assert_eq!(cli.config().seed, 9);
        assert_eq!(roster, vec![RosterEntry::new("Ada", 'A'), RosterEntry::new("Bo", 'B')]);
    }

    #[test]
    fn test_bad_player_flags() {
        assert!(matches!(parse(&["-p", "Ada"]).roster(), Err(RosterError::InvalidToken(_))));
        assert!(matches!(
            parse(&["-p", "Ada:A", "-p", "Bo:A"]).roster(),
            Err(RosterError::DuplicateToken('A'))
        ));
    }
}
