//! Tests for win/draw rules and move validation.

use tictactoe_cli::{
    Board, Cell, ClassicGame, Game, LargeGame, MoveError, MoveOutcome, Outcome, Player,
    check_winner, has_won, is_draw,
};

/// Lines of an N×N board as lists of (row, col).
fn lines<const N: usize>() -> Vec<Vec<(usize, usize)>> {
    let mut lines = Vec::new();
    for i in 0..N {
        lines.push((0..N).map(|j| (i, j)).collect());
        lines.push((0..N).map(|j| (j, i)).collect());
    }
    lines.push((0..N).map(|i| (i, i)).collect());
    lines.push((0..N).map(|i| (i, N - 1 - i)).collect());
    lines
}

/// Every board over {Empty, P1, P2}^9, decoded from a base-3 index.
fn all_classic_boards() -> impl Iterator<Item = Board<3>> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut board = Board::<3>::new();
        for position in 1..=9 {
            let cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Player::Player1),
                _ => Cell::Occupied(Player::Player2),
            };
            code /= 3;
            let (r, c) = Board::<3>::coordinates(position).expect("Bad position");
            board.set(r, c, cell);
        }
        board
    })
}

fn holds_line<const N: usize>(board: &Board<N>, player: Player) -> bool {
    lines::<N>()
        .iter()
        .any(|line| line.iter().all(|(r, c)| board.get(*r, *c) == Some(Cell::Occupied(player))))
}

#[test]
fn test_winner_iff_line_on_every_classic_board() {
    for board in all_classic_boards() {
        for player in [Player::Player1, Player::Player2] {
            assert_eq!(has_won(&board, player), holds_line(&board, player));
        }
        let expected = if holds_line(&board, Player::Player1) {
            Some(Player::Player1)
        } else if holds_line(&board, Player::Player2) {
            Some(Player::Player2)
        } else {
            None
        };
        assert_eq!(check_winner(&board), expected);
    }
}

#[test]
fn test_draw_iff_no_empty_cell_on_every_classic_board() {
    for board in all_classic_boards() {
        let full = board.cells().all(|c| c != Cell::Empty);
        assert_eq!(is_draw(&board), full);
    }
}

#[test]
fn test_every_large_line_wins() {
    for line in lines::<4>() {
        let mut board = Board::<4>::new();
        for (r, c) in &line {
            board.set(*r, *c, Cell::Occupied(Player::Player2));
        }
        assert_eq!(check_winner(&board), Some(Player::Player2));
    }
}

#[test]
fn test_top_row_scenario() {
    let mut game = ClassicGame::new();
    for position in [1, 2, 3] {
        game.apply_move(position).expect("Valid move");
    }
    assert_eq!(check_winner(game.board()), Some(Player::Player1));
    assert!(!is_draw(game.board()));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = ClassicGame::new();
    let moves = [1, 2, 3, 5, 4, 7, 6, 9, 8];
    for (i, position) in moves.iter().enumerate() {
        let outcome = game.play(*position).expect("Valid move");
        if i + 1 < moves.len() {
            assert_eq!(outcome, Outcome::InProgress);
        } else {
            assert_eq!(outcome, Outcome::Draw);
        }
    }
    assert_eq!(check_winner(game.board()), None);
    assert!(is_draw(game.board()));
}

#[test]
fn test_position_ten_out_of_range() {
    let mut game = ClassicGame::new();
    game.play(5).expect("Valid move");
    let before = game.clone();

    assert_eq!(
        game.apply_move(10),
        Err(MoveError::OutOfRange {
            position: 10,
            max: 9
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_occupied_cell_keeps_turn() {
    let mut game = ClassicGame::new();
    game.play(5).expect("Valid move");
    let before = game.clone();

    assert_eq!(
        game.submit("5"),
        MoveOutcome::Rejected(MoveError::CellOccupied(5))
    );
    assert_eq!(game, before);
    assert_eq!(game.state().to_play(), Player::Player2);
}

#[test]
fn test_failed_moves_never_mutate() {
    let mut game = LargeGame::new();
    game.play(1).expect("Valid move");
    let before = game.clone();

    for text in ["", "one", "1.5", "-4", "17", "99999999999999999999", "1"] {
        assert!(matches!(game.submit(text), MoveOutcome::Rejected(_)));
        assert_eq!(game, before, "State changed on {:?}", text);
    }
}

#[test]
fn test_second_player_can_win() {
    let mut game = Game::<3>::new();
    for position in [1, 3, 2, 5, 9] {
        assert_eq!(game.play(position), Ok(Outcome::InProgress));
    }
    assert_eq!(game.play(7), Ok(Outcome::Won(Player::Player2)));
    assert_eq!(game.state().score().wins(Player::Player2), 1);
}
