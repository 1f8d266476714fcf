//! Property tests for movement, event ordering and player invariants.

use life_track::board::Board;
use life_track::catalog::{Catalog, EventKind};
use life_track::core::{GameConfig, GameRng, GameState, Player, PlayerId};
use life_track::effects::{EventResolver, Outcome};
use life_track::io::{RecordingSink, ScriptedInput};
use life_track::rules::TurnEngine;
use life_track::setup::RosterEntry;
use proptest::prelude::*;

const END: u32 = 36;

fn single_player(seed: u64) -> GameState {
    let mut state = GameState::standard(
        GameConfig::default().with_seed(seed),
        vec![RosterEntry::new("Ada", 'A')],
    )
    .unwrap();
    state.player_mut(PlayerId::new(0)).mark_initialized();
    state
}

proptest! {
    #[test]
    fn prop_advance_caps_at_end(start in 0u32..END, distance in 1u32..=12) {
        let catalog = Catalog::standard();
        let mut player = Player::new("Ada", 'A', &catalog, 0);
        player.advance(start, END);

        let step = player.advance(distance, END);

        prop_assert_eq!(player.position(), (start + distance).min(END));
        prop_assert_eq!(step.capped, start + distance >= END);
        prop_assert_eq!(player.is_retired(), step.capped);
    }

    #[test]
    fn prop_crossed_events_ascending(start in 0u32..=END, distance in 0u32..=12) {
        let board = Board::new(&Catalog::standard());
        let end = (start + distance).min(END);

        let crossed = board.crossed_events(start, end);

        for pair in crossed.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for (position, _) in &crossed {
            prop_assert!(*position > start && *position <= end);
        }
    }

    #[test]
    fn prop_marriage_is_idempotent(attempts in 1usize..5) {
        let catalog = Catalog::standard();
        let mut player = Player::new("Ada", 'A', &catalog, 0);

        prop_assert!(player.marry());
        for _ in 0..attempts {
            prop_assert!(!player.marry());
            prop_assert!(player.is_married());
        }
    }

    #[test]
    fn prop_unemployed_pay_changes_nothing(seed in any::<u64>(), bonus in 0.0f64..3.0) {
        let catalog = Catalog::builder().education("Night School", bonus, 0).build();
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut output = RecordingSink::new();
        let mut player = Player::new("Ada", 'A', &catalog, 1_000);
        let night_school = catalog.education_by_name("Night School").unwrap().clone();
        player.enroll(&night_school);

        let outcome = EventResolver::new(&catalog, &config, &mut rng, &mut input, &mut output)
            .resolve(EventKind::Pay, &mut player)
            .unwrap();

        prop_assert_eq!(outcome, Outcome::PayMissed);
        prop_assert_eq!(player.balance(), 1_000);
    }

    #[test]
    fn prop_unmarried_cannot_have_children(seed in any::<u64>(), answer in prop::sample::select(vec!["1", "2"])) {
        let catalog = Catalog::standard();
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let mut input = ScriptedInput::new([answer]);
        let mut output = RecordingSink::new();
        let mut player = Player::new("Ada", 'A', &catalog, 0);

        let outcome = EventResolver::new(&catalog, &config, &mut rng, &mut input, &mut output)
            .resolve(EventKind::Children, &mut player)
            .unwrap();

        prop_assert_eq!(outcome, Outcome::NotMarried);
        prop_assert_eq!(player.kids(), 0);
        prop_assert_eq!(input.remaining(), 1);
    }

    /// Accept every offer and walk to the end, checking that nothing ever
    /// moves backwards and money only flows the way each event says.
    #[test]
    fn prop_progress_is_monotone(seed in any::<u64>(), rolls in prop::collection::vec(1u32..=6, 1..40)) {
        let mut state = single_player(seed);
        let ada = PlayerId::new(0);

        for roll in rolls {
            if state.player(ada).is_retired() {
                break;
            }
            let before = state.player(ada).clone();
            let mut input = ScriptedInput::new(std::iter::repeat("1").take(16));
            let mut output = RecordingSink::new();

            let report = TurnEngine::new()
                .move_by(&mut state, ada, roll, &mut input, &mut output)
                .unwrap();
            let after = state.player(ada);

            prop_assert!(after.position() >= before.position());
            prop_assert!(after.kids() >= before.kids());
            prop_assert!(after.credentials().len() >= before.credentials().len());
            prop_assert!(after.salary_multiplier() >= before.salary_multiplier());
            prop_assert!(!before.is_married() || after.is_married());

            let mut expected = before.balance();
            for resolution in &report.resolutions {
                match resolution.outcome {
                    Outcome::Paid { amount } => {
                        prop_assert!(amount >= 0);
                        expected += amount;
                    }
                    Outcome::EducationEnrolled { cost, .. } => expected -= cost,
                    _ => {}
                }
            }
            prop_assert_eq!(after.balance(), expected);
        }
    }
}
