use crate::game::{windows, Board, Cell, Player, CENTER_COL};

/// Points per own piece in the center column.
pub const CENTER_WEIGHT: i64 = 3;
/// A window fully owned by the evaluated player.
pub const COMPLETE_RUN: i64 = 100_000;
/// One piece short of a run with the gap still open.
pub const OPEN_THREAT: i64 = 100;
/// Two pieces short of a run with both gaps open.
pub const BUILDING: i64 = 10;
/// Opponent is one piece short of a run with the gap still open.
pub const OPPONENT_THREAT: i64 = -80;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: center bias plus a score for every N-cell window.
#[derive(Debug, Clone, Copy)]
pub struct WindowHeuristic {
    connect: usize,
}

impl WindowHeuristic {
    pub fn new(connect: usize) -> Self {
        WindowHeuristic { connect }
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> i64 {
        let n = self.connect;
        let mut score = if own == n {
            COMPLETE_RUN
        } else if own == n - 1 && empty == 1 {
            OPEN_THREAT
        } else if own == n - 2 && empty == 2 {
            BUILDING
        } else {
            0
        };

        if opp == n - 1 && empty == 1 {
            score += OPPONENT_THREAT;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        let mut score = board.count_in_column(CENTER_COL, player) as i64 * CENTER_WEIGHT;

        for window in windows(self.connect) {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for cell in board.window_cells(window) {
                match cell {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    Cell::Empty => empty += 1,
                    _ => {}
                }
            }
            score += self.score_window(own, opp, empty);
        }

        score
    }
}
