//! Player input as first-class values.
//!
//! A line typed at the prompt becomes a [`TurnInput`], and submitting it
//! to the engine yields a [`MoveOutcome`] rather than a bare status code.

use super::phases::Outcome;
use tracing::{debug, instrument};

/// Position typed by a player to save the game and leave.
pub const SAVE_SENTINEL: i64 = 0;

/// What a player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnInput {
    /// Save the game and quit.
    Save,
    /// Play the 1-based cell index (not yet range-checked).
    Cell(i64),
}

impl TurnInput {
    /// Parses a line of player input.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidInput`] if the text is not an integer.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, MoveError> {
        let trimmed = text.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            debug!(input = %trimmed, "Input is not an integer");
            MoveError::InvalidInput(trimmed.to_string())
        })?;

        if value == SAVE_SENTINEL {
            Ok(TurnInput::Save)
        } else {
            Ok(TurnInput::Cell(value))
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The text is not an integer.
    #[display("Invalid input {:?}: enter a cell number", _0)]
    InvalidInput(String),

    /// The index is outside `1..=max`.
    #[display("Invalid input: cell {} is not between 1 and {}", position, max)]
    OutOfRange {
        /// Requested position.
        position: i64,
        /// Largest valid position.
        max: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is not empty", _0)]
    CellOccupied(usize),

    /// The round has already been won or drawn.
    #[display("The round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of submitting one line of input to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the round now stands at this outcome.
    Accepted(Outcome),
    /// The move was refused and nothing changed.
    Rejected(MoveError),
    /// The player asked to save and quit.
    SaveRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(TurnInput::parse("0"), Ok(TurnInput::Save));
        assert_eq!(TurnInput::parse(" 0\n"), Ok(TurnInput::Save));
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(TurnInput::parse("5\n"), Ok(TurnInput::Cell(5)));
        assert_eq!(TurnInput::parse("-3"), Ok(TurnInput::Cell(-3)));
        assert_eq!(TurnInput::parse("+7"), Ok(TurnInput::Cell(7)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(
            TurnInput::parse("abc"),
            Err(MoveError::InvalidInput("abc".to_string()))
        );
        assert!(matches!(
            TurnInput::parse(""),
            Err(MoveError::InvalidInput(_))
        ));
        assert!(matches!(
            TurnInput::parse("1 2"),
            Err(MoveError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::OutOfRange {
            position: 10,
            max: 9,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: cell 10 is not between 1 and 9"
        );
        assert_eq!(MoveError::CellOccupied(4).to_string(), "Cell 4 is not empty");
    }
}
