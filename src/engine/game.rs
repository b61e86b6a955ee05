//! Game engine: move validation, application and turn-taking.

use super::action::{MoveError, MoveOutcome, TurnInput};
use super::invariants::{InvariantSet, InvariantViolation, ResumableInvariants};
use super::phases::Outcome;
use super::{Board, Cell, GameState};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine over an N×N board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<const N: usize> {
    state: GameState<N>,
}

/// Engine for the 3x3 game.
pub type ClassicGame = Game<3>;

/// Engine for the 4x4 game.
pub type LargeGame = Game<4>;

impl<const N: usize> Game<N> {
    /// Creates a new game with an empty board and Player 1 to play.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resumes a previously exported state.
    ///
    /// # Errors
    ///
    /// Returns the violated invariants if the state could not have been
    /// reached by legal play or is already finished.
    #[instrument(skip(state), fields(to_play = %state.to_play()))]
    pub fn resume(state: GameState<N>) -> Result<Self, Vec<InvariantViolation>> {
        ResumableInvariants::check_all(&state)?;
        debug!("Resumed state passed validation");
        Ok(Self { state })
    }

    /// Returns the current game state, for display or saving.
    pub fn state(&self) -> &GameState<N> {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.state.board
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.state.board)
    }

    /// Clears the board and gives the move to Player 1. The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.board.clear();
        self.state.to_play = super::Player::Player1;
        debug!("Board reset");
    }

    /// Places the current player's mark at a 1-based position.
    ///
    /// Does not pass the turn; see [`Game::advance_turn`] and [`Game::play`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round is already won or drawn.
    /// - [`MoveError::OutOfRange`] if `position` is not in `1..=N²`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The state is untouched on error.
    #[instrument(skip(self), fields(player = %self.state.to_play))]
    pub fn apply_move(&mut self, position: i64) -> Result<(), MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let (row, col) = usize::try_from(position)
            .ok()
            .and_then(Board::<N>::coordinates)
            .ok_or(MoveError::OutOfRange {
                position,
                max: Board::<N>::CELLS,
            })?;

        if !self.state.board.is_empty(row, col) {
            return Err(MoveError::CellOccupied(row * N + col + 1));
        }

        self.state
            .board
            .set(row, col, Cell::Occupied(self.state.to_play));
        debug!(row, col, "Mark placed");
        Ok(())
    }

    /// Passes the turn to the other player.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        self.state.to_play = self.state.to_play.opponent();
    }

    /// Applies a move, evaluates the board and passes the turn if the round
    /// goes on.
    ///
    /// # Errors
    ///
    /// Same as [`Game::apply_move`].
    #[instrument(skip(self))]
    pub fn play(&mut self, position: i64) -> Result<Outcome, MoveError> {
        self.apply_move(position)?;

        let outcome = self.outcome();
        match outcome {
            Outcome::InProgress => self.advance_turn(),
            Outcome::Won(winner) => {
                info!(%winner, "Round won");
                self.state.score.record_win(winner);
            }
            Outcome::Draw => info!("Round drawn"),
        }
        Ok(outcome)
    }

    /// Handles one line of player input.
    #[instrument(skip(self))]
    pub fn submit(&mut self, text: &str) -> MoveOutcome {
        let input = match TurnInput::parse(text) {
            Ok(input) => input,
            Err(err) => return MoveOutcome::Rejected(err),
        };

        match input {
            TurnInput::Save => MoveOutcome::SaveRequested,
            TurnInput::Cell(position) => match self.play(position) {
                Ok(outcome) => MoveOutcome::Accepted(outcome),
                Err(err) => {
                    debug!(%err, "Move rejected");
                    MoveOutcome::Rejected(err)
                }
            },
        }
    }
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Self::new()
    }
}
