//! Whole games played from the roster editor to the final standings.

use life_track::core::{GameConfig, GameState, PlayerId};
use life_track::io::{RecordingSink, ScriptedInput};
use life_track::rules::{GameLoop, GameSummary};
use life_track::setup::{edit_roster, RosterEntry};

/// Keys that work at every prompt: `2` moves at the action menu and
/// declines offers, `3` passes and is skipped by yes/no prompts.
fn move_and_pass(turns: usize) -> Vec<&'static str> {
    let mut keys = vec!["2"];
    for _ in 0..turns {
        keys.extend(["2", "3"]);
    }
    keys
}

fn play(seed: u64, roster: Vec<RosterEntry>, keys: Vec<&'static str>) -> (GameState, GameSummary, RecordingSink) {
    let mut state = GameState::standard(GameConfig::default().with_seed(seed), roster).unwrap();
    let mut input = ScriptedInput::new(keys);
    let mut output = RecordingSink::new();
    let summary = GameLoop::new(&mut state, &mut input, &mut output).run().unwrap();
    (state, summary, output)
}

#[test]
fn test_solo_game_runs_to_retirement() {
    let (state, summary, output) = play(11, vec![RosterEntry::new("Ada", 'A')], move_and_pass(200));
    let ada = state.player(PlayerId::new(0));

    assert!(!summary.quit);
    assert!(ada.is_retired());
    assert_eq!(ada.position(), 36);
    // Every offer was declined.
    assert!(!ada.is_married());
    assert_eq!(ada.kids(), 0);
    assert_eq!(ada.credentials().len(), 2);
    assert!(ada.balance() >= 100_000);
    assert!(output.contains("Ada has reached the end of the game!"));
    assert!(output.contains("Everyone has retired!"));
    // Never more passes than squares on the track.
    assert!(summary.passes <= 36);
}

#[test]
fn test_players_alternate_in_roster_order() {
    let roster = vec![RosterEntry::new("Ada", 'A'), RosterEntry::new("Bo", 'B')];
    let (state, summary, output) = play(5, roster, {
        let mut keys = vec!["2"];
        keys.extend(move_and_pass(200));
        keys
    });

    assert!(state.players.iter().all(|(_, p)| p.is_retired()));
    let turns: Vec<&String> = output.lines().iter().filter(|l| l.starts_with("It's ")).collect();
    assert!(turns[0].starts_with("It's Ada's turn"));
    assert!(turns[1].starts_with("It's Bo's turn"));
    assert_eq!(summary.standings.len(), 2);
    assert!(summary.standings[0].balance >= summary.standings[1].balance);
}

#[test]
fn test_same_seed_same_game() {
    let roster = || vec![RosterEntry::new("Ada", 'A'), RosterEntry::new("Bo", 'B')];
    let keys = || {
        let mut keys = vec!["1"];
        keys.extend(move_and_pass(200));
        keys
    };

    let (first, first_summary, first_output) = play(99, roster(), keys());
    let (second, second_summary, second_output) = play(99, roster(), keys());

    assert_eq!(first_output.lines(), second_output.lines());
    assert_eq!(first_summary, second_summary);
    assert_eq!(first.rng_state(), second.rng_state());
}

#[test]
fn test_roster_editor_feeds_game() {
    let mut input = ScriptedInput::new(["1", "Ada", "a", "1", "Bo", "b", "0", "Y"]);
    let mut output = RecordingSink::new();
    let roster = edit_roster(&mut input, &mut output).unwrap().unwrap();

    let state = GameState::standard(GameConfig::default(), roster).unwrap();

    assert_eq!(state.player_count(), 2);
    assert_eq!(state.player(PlayerId::new(1)).token(), 'b');
    assert!(state.players.iter().all(|(_, p)| p.balance() == 100_000 && p.position() == 0));
}

#[test]
fn test_running_out_of_input_stops_the_game() {
    let roster = vec![RosterEntry::new("Ada", 'A')];
    let mut state = GameState::standard(GameConfig::default(), roster).unwrap();
    let mut input = ScriptedInput::new(["2", "2"]);
    let mut output = RecordingSink::new();

    let result = GameLoop::new(&mut state, &mut input, &mut output).run();

    assert!(matches!(result, Err(life_track::core::GameError::InputClosed { .. })));
}
