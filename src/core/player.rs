//! Seats, per-seat storage and the player record.
//!
//! `PlayerId` is a seat number and `PlayerMap` keeps one value per seat
//! in turn order. `Player` is the mutable record of one participant.
//! Its mutators keep the record consistent: one career at a time,
//! credentials only grow, position and the married/retired flags only
//! move forward.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::catalog::{Catalog, CareerId, Education, EducationId};

/// Seat number, 0-based, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use life_track::core::{PlayerId, PlayerMap};
///
/// let balances = PlayerMap::from_vec(vec![100, 250]);
/// assert_eq!(balances[PlayerId::new(1)], 250);
/// assert_eq!(balances.player_ids().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat `seats` in order. There must be between 1 and 255 of them.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "Must have at least 1 player");
        assert!(seats.len() <= 255, "At most 255 players supported");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// Seats with their values, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.player_ids().zip(self.seats.iter())
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.seats.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}

/// A held education and the bonus it contributed when it was granted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub education: EducationId,
    pub bonus: f64,
}

/// Result of advancing a token along the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Position before the move.
    pub from: u32,
    /// Position after the move.
    pub to: u32,
    /// Whether the move hit the end of the track.
    pub capped: bool,
}

/// One participant's full game record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    token: char,
    balance: i64,
    career: CareerId,
    credentials: Vector<Credential>,
    multiplier: f64,
    kids: u32,
    married: bool,
    position: u32,
    initialized: bool,
    retired: bool,
}

impl Player {
    /// Create a player in the starting state: unemployed, holding the
    /// baseline credential, at position 0.
    #[must_use]
    pub fn new(name: impl Into<String>, token: char, catalog: &Catalog, starting_balance: i64) -> Self {
        let baseline = catalog.education(catalog.baseline_education());
        let mut player = Self {
            name: name.into(),
            token,
            balance: starting_balance,
            career: catalog.unemployed(),
            credentials: Vector::new(),
            multiplier: 0.0,
            kids: 0,
            married: false,
            position: 0,
            initialized: false,
            retired: false,
        };
        player.enroll(baseline);
        player
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map marker.
    #[must_use]
    pub fn token(&self) -> char {
        self.token
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    #[must_use]
    pub fn career(&self) -> CareerId {
        self.career
    }

    /// Held credentials, in the order they were granted.
    #[must_use]
    pub fn credentials(&self) -> &Vector<Credential> {
        &self.credentials
    }

    /// Sum of the bonuses of every held credential.
    #[must_use]
    pub fn salary_multiplier(&self) -> f64 {
        self.multiplier
    }

    #[must_use]
    pub fn kids(&self) -> u32 {
        self.kids
    }

    #[must_use]
    pub fn is_married(&self) -> bool {
        self.married
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether the one-time starting draw has happened.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Whether the player holds `career`.
    #[must_use]
    pub fn has_career(&self, career: CareerId) -> bool {
        self.career == career
    }

    /// The amount a paycheck square pays right now.
    #[must_use]
    pub fn paycheck(&self, catalog: &Catalog) -> i64 {
        let salary = catalog.career(self.career).salary;
        (salary as f64 * self.multiplier).round() as i64
    }

    /// Move `distance` squares forward, stopping at `end`.
    ///
    /// Reaching `end` (exactly or by overshooting) retires the player.
    pub fn advance(&mut self, distance: u32, end: u32) -> Advance {
        let from = self.position;
        let target = from.saturating_add(distance);
        let capped = target >= end;
        self.position = target.min(end).max(from);
        if capped {
            self.retired = true;
        }
        Advance {
            from,
            to: self.position,
            capped,
        }
    }

    /// Replace the current career.
    pub fn take_career(&mut self, career: CareerId) {
        self.career = career;
    }

    /// Add a credential and recompute the multiplier.
    ///
    /// Holding the same education twice is allowed; the bonuses stack.
    pub fn enroll(&mut self, education: &Education) {
        self.credentials.push_back(Credential {
            education: education.id,
            bonus: education.bonus,
        });
        self.multiplier = self.credentials.iter().map(|c| c.bonus).sum();
    }

    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Spend money. The balance may go negative.
    pub fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    /// Returns `true` if this changed the marital status.
    pub fn marry(&mut self) -> bool {
        let changed = !self.married;
        self.married = true;
        changed
    }

    pub fn add_children(&mut self, count: u32) {
        self.kids += count;
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (Catalog, Player) {
        let catalog = Catalog::standard();
        let player = Player::new("Ada", 'A', &catalog, 100_000);
        (catalog, player)
    }

    #[test]
    fn test_player_id_display_is_one_based() {
        assert_eq!(PlayerId::new(0).index(), 0);
        assert_eq!(PlayerId::new(0).to_string(), "Player 1");
    }

    #[test]
    fn test_player_map_index_mut() {
        let mut map = PlayerMap::from_vec(vec![0, 10, 20]);
        map[PlayerId::new(1)] = 15;

        assert_eq!(map[PlayerId::new(1)], 15);
        assert_eq!(map.player_ids().last(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec!["a", "b"]);
        assert_eq!(map.player_count(), 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &"b"));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_new_player_defaults() {
        let (catalog, player) = fresh();

        assert_eq!(player.name(), "Ada");
        assert_eq!(player.token(), 'A');
        assert_eq!(player.balance(), 100_000);
        assert!(player.has_career(catalog.unemployed()));
        assert_eq!(player.credentials().len(), 1);
        assert_eq!(player.credentials()[0].education, catalog.baseline_education());
        assert!((player.salary_multiplier() - 1.0).abs() < 1e-9);
        assert_eq!(player.kids(), 0);
        assert!(!player.is_married());
        assert_eq!(player.position(), 0);
        assert!(!player.is_initialized());
        assert!(!player.is_retired());
    }

    #[test]
    fn test_advance_within_track() {
        let (_, mut player) = fresh();

        let step = player.advance(4, 36);
        assert_eq!(step, Advance { from: 0, to: 4, capped: false });
        assert!(!player.is_retired());
    }

    #[test]
    fn test_advance_exactly_to_end_retires() {
        let (_, mut player) = fresh();
        player.advance(30, 36);

        let step = player.advance(6, 36);
        assert_eq!(step.to, 36);
        assert!(step.capped);
        assert!(player.is_retired());
    }

    #[test]
    fn test_advance_overshoot_caps() {
        let (_, mut player) = fresh();
        player.advance(34, 36);

        let step = player.advance(5, 36);
        assert_eq!(step, Advance { from: 34, to: 36, capped: true });
        assert!(player.is_retired());
    }

    #[test]
    fn test_enroll_stacks_duplicates() {
        let (catalog, mut player) = fresh();
        let college = catalog.education_by_name("Community College").unwrap();

        player.enroll(college);
        player.enroll(college);

        assert_eq!(player.credentials().len(), 3);
        assert!((player.salary_multiplier() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_paycheck_rounds() {
        let (catalog, mut player) = fresh();
        assert_eq!(player.paycheck(&catalog), 0);

        let plumber = catalog.career_by_name("Plumber").unwrap().id;
        player.take_career(plumber);
        player.enroll(catalog.education_by_name("Community College").unwrap());

        assert_eq!(player.paycheck(&catalog), 72_000);
    }

    #[test]
    fn test_marry_is_one_way() {
        let (_, mut player) = fresh();
        assert!(player.marry());
        assert!(!player.marry());
        assert!(player.is_married());
    }

    #[test]
    fn test_player_serialization() {
        let (_, player) = fresh();
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
