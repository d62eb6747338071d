use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// An opponent that picks uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a column, or `None` if the board is full.
    pub fn select_column(&mut self, board: &Board) -> Option<usize> {
        let moves = board.valid_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, ROWS};

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(2, Player::Red).unwrap();
        }
        let legal = board.valid_moves();

        for _ in 0..100 {
            let col = agent.select_column(&board).unwrap();
            assert!(legal.contains(&col), "Column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_agent_full_board() {
        let mut agent = RandomAgent::with_seed(7);
        let mut board = Board::new();
        for col in 0..crate::game::COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Yellow).unwrap();
            }
        }
        assert_eq!(agent.select_column(&board), None);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_column(&board), b.select_column(&board));
        }
    }
}
