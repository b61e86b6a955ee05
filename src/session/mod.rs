//! Interactive session: rounds of play on one terminal until the players quit.

mod menu;
mod render;

pub use menu::MenuChoice;
pub use render::Renderer;

use crate::engine::{Board, Game, MoveOutcome, Outcome};
use crate::persistence::{SaveFile, SavePolicy};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The players quit, or input ran out.
    Quit,
    /// The game was saved before leaving.
    Saved,
}

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished(Outcome),
    Saved,
    InputClosed,
}

/// A sequence of rounds between two local players.
///
/// Generic over the input and output streams so tests can script a game.
pub struct Session<R, W, const N: usize> {
    input: R,
    output: W,
    save_file: SaveFile,
    renderer: Renderer,
    game: Game<N>,
    consume_on_finish: bool,
}

impl<R: BufRead, W: Write, const N: usize> Session<R, W, N> {
    /// Opens a session, resuming the saved game if there is a usable one.
    #[instrument(skip(input, output, save_file, renderer), fields(path = %save_file.path().display()))]
    pub fn new(
        input: R,
        output: W,
        save_file: SaveFile,
        policy: SavePolicy,
        renderer: Renderer,
    ) -> Self {
        let (game, from_disk) = save_file.restore::<N>(policy);
        info!(from_disk, size = N, "Session opened");
        Self {
            input,
            output,
            save_file,
            renderer,
            game,
            consume_on_finish: from_disk && policy == SavePolicy::KeepUntilConsumed,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game<N> {
        &self.game
    }

    /// Plays rounds until the players quit or save.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the terminal fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            let outcome = match self.play_round()? {
                RoundEnd::Finished(outcome) => outcome,
                RoundEnd::Saved => return Ok(SessionEnd::Saved),
                RoundEnd::InputClosed => return Ok(SessionEnd::Quit),
            };

            if self.consume_on_finish {
                self.consume_on_finish = false;
                if let Err(err) = self.save_file.clear() {
                    warn!(%err, "Could not clear consumed save");
                }
            }

            writeln!(self.output, "{}", outcome)?;
            writeln!(self.output, "score: {}", self.game.state().score())?;

            loop {
                match self.ask_menu()? {
                    Some(MenuChoice::Replay) => {
                        self.game.reset();
                        break;
                    }
                    // The score carries over on a fresh board.
                    Some(MenuChoice::SaveAndQuit) => {
                        self.game.reset();
                        if self.save()? {
                            return Ok(SessionEnd::Saved);
                        }
                    }
                    Some(MenuChoice::Quit) | None => return Ok(SessionEnd::Quit),
                }
            }
        }
    }

    /// Runs turns until the round ends, the game is saved or input ends.
    fn play_round(&mut self) -> io::Result<RoundEnd> {
        // A resumed save may hold a round that is already decided.
        let outcome = self.game.outcome();
        if outcome.is_terminal() {
            debug!(%outcome, "Resumed a finished round");
            let board = self.renderer.board(self.game.board());
            write!(self.output, "{}", board)?;
            return Ok(RoundEnd::Finished(outcome));
        }

        loop {
            let board = self.renderer.board(self.game.board());
            write!(self.output, "{}", board)?;
            writeln!(
                self.output,
                "{}: which cell? (1-{} | 0 to save and quit)",
                self.game.state().to_play(),
                Board::<N>::CELLS
            )?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed mid-round");
                return Ok(RoundEnd::InputClosed);
            };

            match self.game.submit(&line) {
                MoveOutcome::Rejected(err) => writeln!(self.output, "{}", err)?,
                MoveOutcome::SaveRequested => {
                    if self.save()? {
                        return Ok(RoundEnd::Saved);
                    }
                }
                MoveOutcome::Accepted(Outcome::InProgress) => {}
                MoveOutcome::Accepted(outcome) => {
                    let board = self.renderer.board(self.game.board());
                    write!(self.output, "{}", board)?;
                    return Ok(RoundEnd::Finished(outcome));
                }
            }
        }
    }

    /// Shows the menu until a valid answer arrives. `None` means input ended.
    fn ask_menu(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            write!(self.output, "{}", MenuChoice::render())?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                debug!(?choice, "Menu choice");
                return Ok(Some(choice));
            }
        }
    }

    /// Writes the current state to the save file and reports the result.
    ///
    /// Returns whether the save succeeded; a failed save is reported to the
    /// players and play continues.
    fn save(&mut self) -> io::Result<bool> {
        match self.save_file.save(self.game.state()) {
            Ok(()) => {
                self.consume_on_finish = false;
                writeln!(self.output, "Game saved")?;
                Ok(true)
            }
            Err(err) => {
                warn!(%err, "Save failed");
                writeln!(self.output, "Could not save the game: {}", err.message)?;
                Ok(false)
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
