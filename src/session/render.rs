//! Board printing for the terminal.

use crate::engine::{Board, Cell, Player};
use crossterm::style::Stylize;

/// Width of the `*` rule framing the board.
const RULE_WIDTH: usize = 20;

/// Column the cell rows are right-aligned to.
const ROW_WIDTH: usize = 14;

/// Renders boards as text, optionally with ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders the board framed by two rules, one line per row.
    pub fn board<const N: usize>(&self, board: &Board<N>) -> String {
        let rule = "*".repeat(RULE_WIDTH);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        for row in board.rows() {
            let width = row.len() * 2;
            out.push_str(&" ".repeat(ROW_WIDTH.saturating_sub(width)));
            for cell in row {
                out.push_str(&self.cell(*cell));
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }

    fn cell(&self, cell: Cell) -> String {
        let glyph = cell.glyph();
        if !self.color {
            return glyph.to_string();
        }
        match cell {
            Cell::Empty => glyph.dark_grey().to_string(),
            Cell::Occupied(Player::Player1) => glyph.blue().bold().to_string(),
            Cell::Occupied(Player::Player2) => glyph.red().bold().to_string(),
        }
    }
}
