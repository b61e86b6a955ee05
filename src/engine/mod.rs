//! Tic-tac-toe rules engine, generic over the board side length.

mod action;
mod game;
mod invariants;
mod phases;
mod rules;
mod types;

pub use action::{MoveError, MoveOutcome, SAVE_SENTINEL, TurnInput};
pub use game::{ClassicGame, Game, LargeGame};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, ResumableInvariants,
    SingleWinnerInvariant,
};
pub use phases::Outcome;
pub use rules::{check_winner, has_won, is_draw, winners};
pub use types::{
    Board, BoardShapeError, Cell, ClassicBoard, CodeError, GameState, LargeBoard, Player, Score,
};
