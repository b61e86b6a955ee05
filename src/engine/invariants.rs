//! Invariants a game state must satisfy to be resumed.
//!
//! The engine upholds these by construction; they matter for states read
//! back from disk, which may have been edited by hand. Any state the engine
//! can export, including one taken between placing a mark and passing the
//! turn, satisfies them.

use super::rules::winners;
use super::{GameState, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: Player 1 has as many marks as Player 2, or one more.
///
/// Player 1 always moves first. `to_play` is not compared against the counts:
/// a state exported between placing a mark and passing the turn is legal.
pub struct MarkBalanceInvariant;

impl<const N: usize> Invariant<GameState<N>> for MarkBalanceInvariant {
    fn holds(state: &GameState<N>) -> bool {
        let first = state.board().count(Player::Player1);
        let second = state.board().count(Player::Player2);

        let holds = first == second || first == second + 1;
        if !holds {
            warn!(first, second, "Mark counts cannot come from alternating play");
        }
        holds
    }

    fn description() -> &'static str {
        "Players alternate marks starting with Player 1"
    }
}

/// Invariant: at most one player holds a line.
///
/// A finished round is still a valid state; two winners is not.
pub struct SingleWinnerInvariant;

impl<const N: usize> Invariant<GameState<N>> for SingleWinnerInvariant {
    fn holds(state: &GameState<N>) -> bool {
        let winners = winners(state.board());
        if winners.len() > 1 {
            warn!(?winners, "Both players hold a line");
        }
        winners.len() <= 1
    }

    fn description() -> &'static str {
        "At most one player holds a line"
    }
}

/// All invariants required of a resumable state.
pub type ResumableInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
