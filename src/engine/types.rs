//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
///
/// Encoded on disk as `0` for [`Player::Player1`] and `1` for [`Player::Player2`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "i8", try_from = "i8")]
pub enum Player {
    /// First player (moves first, plays `o`).
    #[display("Player 1")]
    Player1,
    /// Second player (plays `x`).
    #[display("Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Returns the glyph used when printing the board.
    pub fn glyph(self) -> char {
        match self {
            Player::Player1 => 'o',
            Player::Player2 => 'x',
        }
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = CodeError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Player::Player1),
            1 => Ok(Player::Player2),
            other => Err(CodeError { code: other }),
        }
    }
}

/// Integer that does not name a player or a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unknown cell code {code} (expected -1, 0 or 1)")]
pub struct CodeError {
    /// The offending code.
    pub code: i8,
}

/// A cell on the board.
///
/// Encoded on disk as `-1` when empty, otherwise as the occupying player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the glyph used when printing the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(player) => player.glyph(),
        }
    }

    /// Returns true if the cell holds a mark of `player`.
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => -1,
            Cell::Occupied(player) => player.into(),
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = CodeError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Cell::Empty),
            other => Player::try_from(other).map(Cell::Occupied),
        }
    }
}

/// Decoded board rows did not form an N×N grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board must be {expected}x{expected}, found {rows} rows with a row of {cols} cells")]
pub struct BoardShapeError {
    /// Side length of the board being decoded into.
    pub expected: usize,
    /// Number of rows found.
    pub rows: usize,
    /// Length of the first offending row (or of the first row).
    pub cols: usize,
}

/// Square N×N board, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

/// The 3x3 board of the classic game.
pub type ClassicBoard = Board<3>;

/// The 4x4 board of the large variant.
pub type LargeBoard = Board<4>;

impl<const N: usize> Board<N> {
    /// Number of cells, which is also the largest valid position.
    pub const CELLS: usize = N * N;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Gets the cell at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Maps a 1-based position to `(row, col)`.
    ///
    /// Returns `None` outside `1..=N²`.
    pub fn coordinates(position: usize) -> Option<(usize, usize)> {
        if position == 0 || position > Self::CELLS {
            return None;
        }
        let index = position - 1;
        Some((index / N, index % N))
    }

    /// Sets the cell at the given row and column. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Checks if the cell at the given row and column is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the marks of one player.
    pub fn count(&self, player: Player) -> usize {
        self.cells().filter(|cell| cell.is(player)).count()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; N]; N];
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<Board<N>> for Vec<Vec<Cell>> {
    fn from(board: Board<N>) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl<const N: usize> TryFrom<Vec<Vec<Cell>>> for Board<N> {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let shape_error = |cols| BoardShapeError {
            expected: N,
            rows: rows.len(),
            cols,
        };

        if rows.len() != N {
            return Err(shape_error(rows.first().map_or(0, Vec::len)));
        }

        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != N {
                return Err(shape_error(row.len()));
            }
            for (c, cell) in row.iter().enumerate() {
                board.cells[r][c] = *cell;
            }
        }
        Ok(board)
    }
}

// serde only implements array traits for fixed lengths, so boards go through
// nested slices on the way out and nested vectors on the way in.
impl<const N: usize> Serialize for Board<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|row| row.as_slice()))
    }
}

impl<'de, const N: usize> Deserialize<'de> for Board<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        Board::try_from(rows).map_err(de::Error::custom)
    }
}

/// Cumulative wins across the rounds of a session.
///
/// Serialized as a two-element array `[player1, player2]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Score {
    player1: u32,
    player2: u32,
}

impl Score {
    /// Returns the number of rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Credits one round to `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::Player1 => self.player1 += 1,
            Player::Player2 => self.player2 += 1,
        }
    }
}

impl From<(u32, u32)> for Score {
    fn from((player1, player2): (u32, u32)) -> Self {
        Self { player1, player2 }
    }
}

impl From<Score> for (u32, u32) {
    fn from(score: Score) -> Self {
        (score.player1, score.player2)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player1, self.player2)
    }
}

/// Complete game state, as written to and read from the save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState<const N: usize> {
    /// The board.
    #[serde(rename = "b")]
    pub(crate) board: Board<N>,
    /// Player whose turn it is.
    pub(crate) to_play: Player,
    /// Wins so far this session. Older saves carry no score.
    #[serde(default)]
    pub(crate) score: Score,
}

impl<const N: usize> GameState<N> {
    /// Creates a fresh state: empty board, Player 1 to play, no wins.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_play: Player::Player1,
            score: Score::default(),
        }
    }

    /// Creates a state from its parts.
    pub fn from_parts(board: Board<N>, to_play: Player, score: Score) -> Self {
        Self {
            board,
            to_play,
            score,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_play(&self) -> Player {
        self.to_play
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> &Score {
        &self.score
    }
}

impl<const N: usize> Default for GameState<N> {
    fn default() -> Self {
        Self::new()
    }
}
