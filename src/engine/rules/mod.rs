//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board, independent of whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, has_won, winners};
