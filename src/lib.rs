//! Terminal tic-tac-toe for two local players.
//!
//! # Architecture
//!
//! - **Engine**: board, turn-taking and win/draw rules, generic over the
//!   board side length (3x3 classic, 4x4 large)
//! - **Persistence**: JSON save file for one in-progress game
//! - **Session**: prompt/print loop with a cumulative score
//!
//! # Example
//!
//! ```
//! use tictactoe_cli::{ClassicGame, Outcome, Player};
//!
//! let mut game = ClassicGame::new();
//! for position in [1, 4, 2, 5] {
//!     game.play(position).unwrap();
//! }
//! assert_eq!(game.play(3), Ok(Outcome::Won(Player::Player1)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod persistence;
mod session;

// Crate-level exports - Engine
pub use engine::{
    Board, BoardShapeError, Cell, ClassicBoard, ClassicGame, CodeError, Game, GameState,
    Invariant, InvariantSet, InvariantViolation, LargeBoard, LargeGame, MarkBalanceInvariant,
    MoveError, MoveOutcome, Outcome, Player, ResumableInvariants, SingleWinnerInvariant,
    SAVE_SENTINEL, Score, TurnInput, check_winner, has_won, is_draw, winners,
};

// Crate-level exports - Persistence
pub use persistence::{DEFAULT_SAVE_FILE, SaveError, SaveFile, SavePolicy};

// Crate-level exports - Session
pub use session::{MenuChoice, Renderer, Session, SessionEnd};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE, Variant};
