//! Board state validation logic

use crate::board::{BoardState, Player};
use crate::rules::WINNING_LINES;

impl BoardState {
    /// Check if the board state is reachable under the game rules
    pub fn is_valid(&self) -> bool {
        let count = Self::count_pieces(&self.cells);
        let (x_count, o_count) = (count.x, count.o);

        // Piece counts must differ by at most 1 in either direction.
        // Allow O-first sequences by permitting O to have one extra move.
        if !(x_count == o_count || x_count == o_count + 1 || o_count == x_count + 1) {
            return false;
        }

        let diff = x_count as isize - o_count as isize;

        // Ensure the recorded turn matches the piece counts
        match self.to_move {
            Player::X => {
                if !(diff == 0 || diff == -1) {
                    return false;
                }
            }
            Player::O => {
                if !(diff == 0 || diff == 1) {
                    return false;
                }
            }
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // If someone won, they must have moved last and the recorded turn must
        // belong to their opponent.
        if x_wins {
            if self.to_move != Player::O {
                return false;
            }
            if !(x_count == o_count + 1 || x_count == o_count) {
                return false;
            }
        }
        if o_wins {
            if self.to_move != Player::X {
                return false;
            }
            if !(o_count == x_count || o_count == x_count + 1) {
                return false;
            }
        }

        // Check for multiple winning lines that don't share a cell
        // (indicates an invalid continuation after a win)
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Necessary for multiple lines to be formed by a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.to_cell();
        let winning_lines: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == target))
            .collect();

        // If fewer than 2 lines, trivially true
        if winning_lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning_lines.iter().all(|line| line.contains(&pos)))
    }
}
