//! JSON save file holding at most one in-progress game.

use super::SaveError;
use crate::engine::{Game, GameState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Default save file name, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// When a save file is emptied after it has been read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SavePolicy {
    /// Leave the file alone until the resumed round finishes or a new save
    /// overwrites it.
    #[default]
    KeepUntilConsumed,
    /// Empty the file at startup whether or not it was loaded.
    ClearOnStart,
}

/// Handle on the save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a handle; nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, decodes and validates a saved game.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the file is missing, empty, unreadable, not
    /// a save for an N×N board, or describes a position that legal play
    /// cannot reach.
    #[instrument(skip(self), fields(path = %self.path.display(), size = N))]
    pub fn load<const N: usize>(&self) -> Result<Game<N>, SaveError> {
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Err(SaveError::new("Save file is empty"));
        }

        let state: GameState<N> = serde_json::from_str(&content)?;
        let game = Game::resume(state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SaveError::new(format!("Inconsistent saved game: {}", descriptions))
        })?;

        info!(to_play = %game.state().to_play(), "Saved game loaded");
        Ok(game)
    }

    /// Overwrites the file with the given state, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the file cannot be written.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save<const N: usize>(&self, state: &GameState<N>) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        info!("Game saved");
        Ok(())
    }

    /// Truncates the file to zero length, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), SaveError> {
        std::fs::write(&self.path, b"")?;
        debug!("Save file cleared");
        Ok(())
    }

    /// Loads a saved game, falling back to a fresh one on any failure.
    ///
    /// Returns the game and whether it came from disk. Under
    /// [`SavePolicy::ClearOnStart`] the file is emptied afterwards either way.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn restore<const N: usize>(&self, policy: SavePolicy) -> (Game<N>, bool) {
        let restored = match self.load::<N>() {
            Ok(game) => (game, true),
            Err(err) => {
                debug!(%err, "No usable save, starting fresh");
                (Game::new(), false)
            }
        };

        if policy == SavePolicy::ClearOnStart
            && let Err(err) = self.clear()
        {
            warn!(%err, "Could not clear save file");
        }

        restored
    }
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}
