//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if `player` holds a full row, a full column or either full diagonal.
#[instrument(skip(board))]
pub fn has_won<const N: usize>(board: &Board<N>, player: Player) -> bool {
    let rows = board.rows();
    let owns = |row: usize, col: usize| rows[row][col].is(player);

    let full_row = (0..N).any(|r| (0..N).all(|c| owns(r, c)));
    let full_col = (0..N).any(|c| (0..N).all(|r| owns(r, c)));
    let main_diagonal = (0..N).all(|i| owns(i, i));
    let anti_diagonal = (0..N).all(|i| owns(i, N - 1 - i));

    full_row || full_col || main_diagonal || anti_diagonal
}

/// Checks if there is a winner on the board.
///
/// Both players are tested; on a board where both hold a line (only
/// reachable through a hand-edited save) Player 1 is reported.
#[instrument(skip(board))]
pub fn check_winner<const N: usize>(board: &Board<N>) -> Option<Player> {
    Player::iter().find(|player| has_won(board, *player))
}

/// Returns every player holding a line.
pub fn winners<const N: usize>(board: &Board<N>) -> Vec<Player> {
    Player::iter().filter(|player| has_won(board, *player)).collect()
}
