//! Game orchestration between two players.

use crate::players::Player;
use anyhow::Result;
use noughts_core::{GameStatus, Gameboard, Mark, MoveError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark completed a line.
    Winner(Mark),
    /// Board full, nobody won.
    Draw,
}

/// Messages sent from the orchestrator to the presentation layer.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player is up.
    TurnStarted {
        /// Display name of the player to move.
        name: String,
        /// Mark that player places.
        mark: Mark,
    },
    /// The computer is taking its thinking delay.
    ComputerThinking,
    /// A move went onto the board.
    MoveMade {
        /// Display name of the mover.
        name: String,
        /// Mark just placed.
        mark: Mark,
        /// Board index the mark landed on.
        position: usize,
    },
    /// A move was rejected; the same player will be asked again.
    MoveRejected {
        /// Display name of the player whose input was rejected.
        name: String,
        /// Why the gameboard refused it.
        error: MoveError,
    },
    /// The grid changed; payload is the rendered board.
    BoardChanged(String),
    /// The game reached a terminal state.
    GameOver {
        /// Win or draw.
        outcome: Outcome,
    },
}

/// Sequences moves from two players over one gameboard.
///
/// The orchestrator is the only thing that mutates the board, and it applies
/// exactly one move per turn slot; whichever player is mid-`choose_move`
/// holds the slot until it resolves.
pub struct Orchestrator {
    board: Gameboard,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator over a fresh board.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Gameboard::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Read access to the board, for assertions and rendering.
    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Plays one game to completion and returns the outcome.
    pub async fn run_game(&mut self) -> Result<Outcome> {
        info!("Starting game");
        self.event_tx
            .send(GameEvent::BoardChanged(self.board.board().render()))?;

        loop {
            match self.board.status() {
                GameStatus::Won(mark) => return self.finish(Outcome::Winner(mark)),
                GameStatus::Draw => return self.finish(Outcome::Draw),
                GameStatus::InProgress => {}
            }

            let mark = self.board.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            self.event_tx.send(GameEvent::TurnStarted {
                name: name.clone(),
                mark,
            })?;
            if player.is_automated() {
                self.event_tx.send(GameEvent::ComputerThinking)?;
            }

            debug!(player = %name, %mark, "Waiting for move");
            let position = player.choose_move(&self.board).await?;

            match self.board.apply_move(position) {
                Ok(placed) => {
                    info!(player = %name, %placed, position, "Move applied");
                    self.event_tx.send(GameEvent::MoveMade {
                        name: name.clone(),
                        mark: placed,
                        position,
                    })?;
                    self.event_tx
                        .send(GameEvent::BoardChanged(self.board.board().render()))?;
                }
                Err(error) => {
                    // Rejection is recoverable: the turn never flipped, so the
                    // loop re-prompts the same player.
                    warn!(player = %name, position, %error, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected { name, error })?;
                }
            }
        }
    }

    /// Clears the board for a rematch.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board.reset();
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome> {
        info!(?outcome, "Game over");
        self.event_tx.send(GameEvent::GameOver { outcome })?;
        Ok(outcome)
    }
}
