//! Headless games: the engine against a random opponent, used as a smoke
//! benchmark without a terminal.

use std::time::Instant;

use crate::ai::RandomAgent;
use crate::engine::{GameConfig, GameEngine, GameOutcome};
use crate::error::ConfigError;
use crate::game::Player;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: usize,
}

/// Tally over a whole match, from the engine's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games() as f64
    }

    fn record(&mut self, result: &GameResult, computer: Player) {
        match result.outcome {
            GameOutcome::Winner(p) if p == computer => self.wins += 1,
            GameOutcome::Winner(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_moves += result.moves;
    }
}

/// Play one game to completion. Red moves first.
pub fn play_game(config: GameConfig, opponent: &mut RandomAgent) -> GameResult {
    let mut engine = GameEngine::new(config);
    let mut player = Player::Red;
    let mut moves = 0;

    loop {
        if let Some(outcome) = engine.outcome() {
            return GameResult { outcome, moves };
        }

        let column = if player == config.computer() {
            engine.find_best_move()
        } else {
            opponent.select_column(engine.board())
        };
        let Some(column) = column else {
            // No legal move left: the board is full
            return GameResult {
                outcome: GameOutcome::Draw,
                moves,
            };
        };

        if !engine.play(column, player) {
            tracing::error!(column, player = player.name(), "rejected move in headless game");
            return GameResult {
                outcome: GameOutcome::Winner(player.other()),
                moves,
            };
        }
        moves += 1;
        player = player.other();
    }
}

/// Play `games_per_colour` games with the computer as Red, then as Yellow.
pub fn play_match(
    connect: usize,
    depth: u32,
    games_per_colour: usize,
    opponent: &mut RandomAgent,
) -> Result<MatchSummary, ConfigError> {
    let mut summary = MatchSummary::default();

    for computer in [Player::Red, Player::Yellow] {
        let config = GameConfig::new(connect, depth, computer)?;
        for game in 0..games_per_colour {
            let start = Instant::now();
            let result = play_game(config, opponent);
            summary.record(&result, computer);
            tracing::info!(
                game = game + 1,
                computer = computer.name(),
                outcome = ?result.outcome,
                moves = result.moves,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "game finished"
            );
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_completes() {
        let config = GameConfig::new(4, 2, Player::Red).unwrap();
        let mut opponent = RandomAgent::with_seed(1);
        let result = play_game(config, &mut opponent);
        assert!(result.moves >= 7, "a game needs at least 7 moves, got {}", result.moves);
        assert!(result.moves <= 42);
    }

    #[test]
    fn test_summary_record() {
        let mut summary = MatchSummary::default();
        let win = GameResult {
            outcome: GameOutcome::Winner(Player::Yellow),
            moves: 12,
        };
        let draw = GameResult {
            outcome: GameOutcome::Draw,
            moves: 42,
        };
        summary.record(&win, Player::Yellow);
        summary.record(&win, Player::Red);
        summary.record(&draw, Player::Red);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.games(), 3);
        assert_eq!(summary.total_moves, 66);
        assert!((summary.win_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_win_rate() {
        assert_eq!(MatchSummary::default().win_rate(), 0.0);
    }

    #[test]
    fn test_match_rejects_bad_config() {
        let mut opponent = RandomAgent::with_seed(3);
        assert!(play_match(8, 3, 1, &mut opponent).is_err());
    }

    #[test]
    fn beats_random_agent() {
        let games_per_colour = 10;
        let mut opponent = RandomAgent::with_seed(2024);
        let summary = play_match(4, 4, games_per_colour, &mut opponent).unwrap();

        assert_eq!(summary.games(), games_per_colour * 2);
        assert!(
            summary.win_rate() > 0.80,
            "Minimax should beat random >80% of the time, got {:.0}% ({}/{})",
            summary.win_rate() * 100.0,
            summary.wins,
            summary.games()
        );
    }
}
