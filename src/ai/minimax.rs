use crate::game::{Board, Player};

use super::heuristic::Heuristic;

/// Score of a position the computer has won. Dominates every heuristic value.
pub const INFINITY: i64 = i64::MAX;

/// Node and cutoff counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax with alpha-beta pruning, always scored from the
/// computer's side.
///
/// The search mutates the board it is given with drop/undo pairs and leaves
/// it exactly as it found it.
pub struct Minimax<'a> {
    heuristic: &'a dyn Heuristic,
    connect: usize,
    computer: Player,
    stats: SearchStats,
}

impl<'a> Minimax<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, connect: usize, computer: Player) -> Self {
        Minimax {
            heuristic,
            connect,
            computer,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score for a leaf, or `None` if the position still needs expanding.
    fn leaf_score(&self, board: &Board, depth: u32) -> Option<i64> {
        if board.has_won(self.computer, self.connect) {
            Some(INFINITY)
        } else if board.has_won(self.computer.other(), self.connect) {
            Some(-INFINITY)
        } else if board.is_full() {
            Some(0)
        } else if depth == 0 {
            Some(self.heuristic.evaluate(board, self.computer))
        } else {
            None
        }
    }

    /// Search `depth` plies below `board`.
    ///
    /// Returns the best column for the side to move (`None` at leaves) and
    /// the position's score. `maximizing` is true when the computer moves.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return (None, score);
        }

        let moves = board.valid_moves();
        let (mover, mut best_score) = if maximizing {
            (self.computer, -INFINITY)
        } else {
            (self.computer.other(), INFINITY)
        };
        // Non-terminal, so at least one column is open
        let mut best_col = moves[0];

        for col in moves {
            if board.drop_piece(col, mover).is_err() {
                continue;
            }
            let (_, score) = self.search(board, depth - 1, alpha, beta, !maximizing);
            board.undo_piece(col);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_col = col;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_col = col;
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (Some(best_col), best_score)
    }
}
