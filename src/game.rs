//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Move, Player};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<PlayedMove>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the standard initial position
    pub fn new() -> Self {
        Game {
            initial: BoardState::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Create a new game with a specified first player
    pub fn new_with_player(first_player: Player) -> Self {
        Game {
            initial: BoardState::new_with_player(first_player),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = current.make_move(mv.position())?;

        self.moves.push(PlayedMove {
            mv,
            player: current.to_move,
        });

        if new_state.is_terminal() {
            self.outcome = Some(if let Some(winner) = new_state.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<BoardState, crate::Error> {
        let mut state = self.initial;
        for (i, m) in self.moves.iter().enumerate() {
            state = state
                .make_move(m.mv.position())
                .map_err(|e| crate::Error::CorruptHistory {
                    index: i,
                    source: Box::new(e),
                })?;
        }
        Ok(state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
