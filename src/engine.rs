//! Exhaustive minimax search for optimal play
//!
//! The search explores every legal continuation of a position and scores
//! terminal states exactly, so the selected move is game-theoretically
//! optimal. No pruning or heuristics are involved; the 3x3 tree is small
//! enough to enumerate fully on every call.

use crate::board::{Cell, Move, Player};
use crate::rules::{LineAnalyzer, is_full};

/// Base score for a won position before depth adjustment.
///
/// A win at depth `d` scores `WIN_BASE - d` for the engine and
/// `d - WIN_BASE` for its opponent, so faster wins score strictly higher
/// and faster losses strictly lower. All scores fall in
/// `[-WIN_BASE, WIN_BASE]`.
pub const WIN_BASE: i32 = 10;

/// Exact minimax engine for one side of the game.
///
/// The engine-controlled mark is per-instance state rather than a global,
/// so independent searches (e.g. one per side in a self-play test) never
/// share configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxEngine {
    engine_player: Player,
}

impl MinimaxEngine {
    /// Create an engine that plays for the given side.
    pub fn new(engine_player: Player) -> Self {
        MinimaxEngine { engine_player }
    }

    /// The side this engine plays for.
    pub fn engine_player(&self) -> Player {
        self.engine_player
    }

    /// The side this engine plays against.
    pub fn opponent(&self) -> Player {
        self.engine_player.opponent()
    }

    /// Exact minimax value of a position, from the engine's perspective.
    ///
    /// `depth` is the number of plies already played below the top-level
    /// call (0 at the root). `maximizing` says whose turn it is inside the
    /// recursion: the engine's when true, the opponent's when false.
    ///
    /// Terminal positions score `WIN_BASE - depth` (engine has won),
    /// `depth - WIN_BASE` (opponent has won), or a flat `0` for a full
    /// board with no winner at any depth. A won position is terminal
    /// even if empty cells remain.
    ///
    /// The grid is mutated in place while exploring but every placement
    /// is undone immediately after its recursive call returns, so `cells`
    /// is bit-identical to its input value when this function returns.
    pub fn score(&self, cells: &mut [Cell; 9], depth: i32, maximizing: bool) -> i32 {
        if LineAnalyzer::has_won(cells, self.engine_player) {
            return WIN_BASE - depth;
        }
        if LineAnalyzer::has_won(cells, self.engine_player.opponent()) {
            return depth - WIN_BASE;
        }
        if is_full(cells) {
            return 0;
        }

        let mark = if maximizing {
            self.engine_player.to_cell()
        } else {
            self.engine_player.opponent().to_cell()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in 0..9 {
            if cells[pos] == Cell::Empty {
                cells[pos] = mark;
                let score = self.score(cells, depth + 1, !maximizing);
                cells[pos] = Cell::Empty;

                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    /// Exact score of every candidate move for the engine, in row-major
    /// order of the candidate cell.
    ///
    /// Each empty cell is tentatively filled with the engine's mark,
    /// scored with [`score`](Self::score) at depth 0 with the opponent to
    /// reply, and restored. The grid is unchanged on return.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SearchPrecondition`] if the position is
    /// already won by either side or the board is full. These are caller
    /// bugs (the turn loop must stop on terminal positions), surfaced as
    /// a distinct error rather than a sentinel move.
    pub fn move_scores(&self, cells: &mut [Cell; 9]) -> Result<Vec<(Move, i32)>, crate::Error> {
        self.check_search_preconditions(cells)?;

        let mark = self.engine_player.to_cell();
        let mut scored = Vec::new();
        for pos in 0..9 {
            if cells[pos] == Cell::Empty {
                cells[pos] = mark;
                let score = self.score(cells, 0, false);
                cells[pos] = Cell::Empty;

                scored.push((Move::from_position(pos)?, score));
            }
        }
        Ok(scored)
    }

    /// The optimal move for the engine in this position.
    ///
    /// Among equally scored moves the first one in row-major scan order
    /// wins; the comparison is strict, so a later candidate never
    /// displaces an earlier one with the same score.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SearchPrecondition`] for terminal input
    /// positions, as in [`move_scores`](Self::move_scores).
    pub fn best_move(&self, cells: &mut [Cell; 9]) -> Result<Move, crate::Error> {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for (mv, score) in self.move_scores(cells)? {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        best_move.ok_or(crate::Error::NoValidMoves)
    }

    fn check_search_preconditions(&self, cells: &[Cell; 9]) -> Result<(), crate::Error> {
        for player in [Player::X, Player::O] {
            if LineAnalyzer::has_won(cells, player) {
                return Err(crate::Error::SearchPrecondition {
                    reason: format!("board is already won by {player}"),
                });
            }
        }
        if is_full(cells) {
            return Err(crate::Error::SearchPrecondition {
                reason: "board is full, no move to search for".to_string(),
            });
        }
        Ok(())
    }
}
