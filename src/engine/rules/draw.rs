//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// Only meaningful as a draw once `check_winner` has returned `None`.
#[instrument(skip(board))]
pub fn is_draw<const N: usize>(board: &Board<N>) -> bool {
    board.cells().all(|cell| cell != Cell::Empty)
}
