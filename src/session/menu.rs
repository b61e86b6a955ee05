//! End-of-round menu.

use strum::IntoEnumIterator;

/// What to do once a round is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum MenuChoice {
    /// Start another round, keeping the score.
    Replay,
    /// Save the score with a fresh board, then quit.
    SaveAndQuit,
    /// Quit without saving.
    Quit,
}

impl MenuChoice {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Replay => "Replay",
            Self::SaveAndQuit => "Save and quit",
            Self::Quit => "Quit",
        }
    }

    /// Returns the number the player types to pick this option.
    pub fn key(self) -> usize {
        Self::iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    /// Parses the player's answer.
    pub fn parse(text: &str) -> Option<Self> {
        let key = text.trim().parse::<usize>().ok()?;
        Self::iter().find(|c| c.key() == key)
    }

    /// Renders the menu, one option per line.
    pub fn render() -> String {
        Self::iter()
            .map(|c| format!("{} - {}\n", c.key(), c.label()))
            .collect()
    }
}
