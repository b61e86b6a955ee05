//! Round outcome.

use super::rules::{check_winner, is_draw};
use super::{Board, Player};
use tracing::instrument;

/// Where a round stands after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Evaluates a board: a winner first, then a full board, else still playing.
    #[instrument(skip(board))]
    pub fn of<const N: usize>(board: &Board<N>) -> Self {
        if let Some(winner) = check_winner(board) {
            Outcome::Won(winner)
        } else if is_draw(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
