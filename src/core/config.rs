//! Game configuration.
//!
//! The board layout and the catalog are fixed; what a game can tune is
//! the seed and the numbers behind the random outcomes.

use serde::{Deserialize, Serialize};

use crate::catalog::STANDARD_STARTING_BALANCE;

/// Tunable parameters for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the shared RNG. Same seed and same inputs replay the same game.
    pub seed: u64,

    /// Balance every player starts with.
    pub starting_balance: i64,

    /// Faces on the movement die.
    pub die_sides: u32,

    /// Upper bound (inclusive) of children from one attempt.
    pub max_children_per_attempt: u32,

    /// Probability that a marriage attempt succeeds.
    pub marriage_odds: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_balance: STANDARD_STARTING_BALANCE,
            die_sides: 6,
            max_children_per_attempt: 3,
            marriage_odds: 0.5,
        }
    }
}

impl GameConfig {
    /// Use a specific seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a different starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Use a die with a different number of faces. Clamped to at least 1.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides.max(1);
        self
    }

    /// Change the odds of a successful marriage attempt. Clamped to `[0, 1]`.
    #[must_use]
    pub fn with_marriage_odds(mut self, odds: f64) -> Self {
        self.marriage_odds = odds.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_balance, 100_000);
        assert_eq!(config.die_sides, 6);
        assert_eq!(config.max_children_per_attempt, 3);
        assert_eq!(config.marriage_odds, 0.5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_starting_balance(5)
            .with_die_sides(0)
            .with_marriage_odds(3.0);

        assert_eq!(config.seed, 123);
        assert_eq!(config.starting_balance, 5);
        assert_eq!(config.die_sides, 1);
        assert_eq!(config.marriage_odds, 1.0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
