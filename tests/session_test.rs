//! Tests for the interactive session, driven by scripted input.

use std::io::Cursor;
use tempfile::TempDir;
use tictactoe_cli::{
    ClassicGame, LargeGame, Player, Renderer, SaveFile, SavePolicy, Session, SessionEnd,
};

type ScriptedSession<const N: usize> = Session<Cursor<Vec<u8>>, Vec<u8>, N>;

fn open<const N: usize>(script: &str, file: &SaveFile, policy: SavePolicy) -> ScriptedSession<N> {
    Session::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        file.clone(),
        policy,
        Renderer::new(false),
    )
}

fn setup_save() -> (TempDir, SaveFile) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file = SaveFile::new(dir.path().join("save.json"));
    (dir, file)
}

#[test]
fn test_save_sentinel_writes_file_and_ends() {
    let (_dir, file) = setup_save();
    let mut session = open::<3>("5\n1\n0\n", &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Saved);

    let saved: ClassicGame = file.load().expect("Load failed");
    assert_eq!(saved.state(), session.game().state());
    assert_eq!(saved.state().to_play(), Player::Player1);
    assert_eq!(saved.board().cells().filter(|c| *c != tictactoe_cli::Cell::Empty).count(), 2);
}

#[test]
fn test_resume_then_finish_consumes_save() {
    let (_dir, file) = setup_save();
    let mut first = open::<3>("1\n4\n0\n", &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(first.run().expect("Run failed"), SessionEnd::Saved);

    // Player 1 holds 1, Player 2 holds 4; finish the top row.
    let mut second = open::<3>("2\n5\n3\n3\n", &file, SavePolicy::KeepUntilConsumed);
    assert!(file.load::<3>().is_ok(), "Save must survive until the round ends");
    assert_eq!(second.run().expect("Run failed"), SessionEnd::Quit);
    assert_eq!(second.game().state().score().wins(Player::Player1), 1);
    assert!(file.load::<3>().is_err(), "Finished round must consume the save");
}

#[test]
fn test_replay_accumulates_score() {
    let (_dir, file) = setup_save();
    // Round 1: Player 1 wins the top row. Round 2: Player 1 wins the left column.
    let script = "1\n4\n2\n5\n3\n1\n1\n2\n4\n5\n7\n3\n";
    let mut session = open::<3>(script, &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Quit);
    assert_eq!(session.game().state().score().wins(Player::Player1), 2);
}

#[test]
fn test_menu_save_keeps_score_with_fresh_board() {
    let (_dir, file) = setup_save();
    let script = "1\n4\n2\n5\n3\n2\n";
    let mut session = open::<3>(script, &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Saved);

    let saved: ClassicGame = file.load().expect("Load failed");
    assert_eq!(saved.state().score().wins(Player::Player1), 1);
    assert_eq!(saved.state().to_play(), Player::Player1);
    assert!(saved.board().cells().all(|c| c == tictactoe_cli::Cell::Empty));
}

#[test]
fn test_unknown_menu_answer_reprompts() {
    let (_dir, file) = setup_save();
    let script = "1\n4\n2\n5\n3\n9\n3\n";
    let mut session = open::<3>(script, &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Quit);
}

#[test]
fn test_large_variant_draw() {
    let (_dir, file) = setup_save();
    // Rows alternate o x o x / o x o x / x o x o / x o x o: no line.
    let moves = [1, 2, 3, 4, 5, 6, 7, 8, 10, 9, 12, 11, 14, 13, 16, 15];
    let mut script: String = moves.iter().map(|m| format!("{}\n", m)).collect();
    script.push_str("3\n");

    let mut session = open::<4>(&script, &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Quit);
    let game: &LargeGame = session.game();
    assert_eq!(game.state().score().wins(Player::Player1), 0);
    assert_eq!(game.state().score().wins(Player::Player2), 0);
    assert!(tictactoe_cli::is_draw(game.board()));
}

#[test]
fn test_clear_on_start_empties_file_before_play() {
    let (_dir, file) = setup_save();
    let mut first = open::<3>("1\n0\n", &file, SavePolicy::KeepUntilConsumed);
    first.run().expect("Run failed");

    let second = open::<3>("", &file, SavePolicy::ClearOnStart);
    assert_eq!(second.game().state().to_play(), Player::Player2);
    assert!(file.load::<3>().is_err());
}

#[test]
fn test_resumed_finished_round_goes_to_menu() {
    let (_dir, file) = setup_save();
    let mut game = ClassicGame::new();
    for position in [1, 4, 2, 5] {
        game.play(position).expect("Valid move");
    }
    game.apply_move(3).expect("Valid move");
    file.save(game.state()).expect("Save failed");

    let mut session = open::<3>("3\n", &file, SavePolicy::KeepUntilConsumed);
    assert_eq!(session.run().expect("Run failed"), SessionEnd::Quit);

    // The win was decided before saving; resuming does not credit it again.
    assert_eq!(session.game().state().score().wins(Player::Player1), 0);
    assert_eq!(session.game().outcome(), tictactoe_cli::Outcome::Won(Player::Player1));
    assert!(file.load::<3>().is_err(), "Finished round must consume the save");
}
