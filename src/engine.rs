//! The game engine: owns the live board and the per-game configuration, and
//! selects the computer's moves.

use crate::ai::{Heuristic, Minimax, SearchStats, WindowHeuristic, INFINITY};
use crate::error::ConfigError;
use crate::game::{Board, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Immutable per-game parameters. Construct with [`GameConfig::new`], which
/// rejects out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    connect: usize,
    depth: u32,
    computer: Player,
}

impl GameConfig {
    pub const MIN_CONNECT: usize = 3;
    pub const MAX_CONNECT: usize = 6;

    pub fn new(connect: usize, depth: u32, computer: Player) -> Result<Self, ConfigError> {
        if !(Self::MIN_CONNECT..=Self::MAX_CONNECT).contains(&connect) {
            return Err(ConfigError::InvalidConfig(format!(
                "connect must be in [{}, {}], got {connect}",
                Self::MIN_CONNECT,
                Self::MAX_CONNECT
            )));
        }
        if depth == 0 {
            return Err(ConfigError::InvalidConfig(
                "search depth must be >= 1".into(),
            ));
        }
        Ok(GameConfig {
            connect,
            depth,
            computer,
        })
    }

    /// Winning run length N
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Search depth in plies
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The computer-controlled player
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The human (or externally driven) player
    pub fn human(&self) -> Player {
        self.computer.other()
    }
}

/// Result of one [`GameEngine::analyze`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub score: i64,
    pub stats: SearchStats,
}

/// A single game between a human and the computer.
///
/// Turn order is the caller's business: every move names the player making
/// it. The engine is `Send`, so a UI can hand it to a worker thread for the
/// computer's move and take it back afterwards.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    heuristic: Box<dyn Heuristic>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_heuristic(config, Box::new(WindowHeuristic::new(config.connect())))
    }

    pub fn with_heuristic(config: GameConfig, heuristic: Box<dyn Heuristic>) -> Self {
        tracing::debug!(
            connect = config.connect(),
            depth = config.depth(),
            computer = config.computer().name(),
            "new game"
        );
        GameEngine {
            config,
            board: Board::new(),
            heuristic,
        }
    }

    /// Validate the parameters and start an empty game.
    pub fn create(connect: usize, depth: u32, computer: Player) -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::new(connect, depth, computer)?))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the live board. `Board` is `Copy` for snapshots.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.valid_moves()
    }

    /// Drop `player`'s piece into `column`. Returns false, leaving the board
    /// untouched, if the column is out of range or full.
    pub fn play(&mut self, column: usize, player: Player) -> bool {
        if column >= COLS {
            return false;
        }
        self.board.drop_piece(column, player).is_ok()
    }

    pub fn check_win(&self, player: Player) -> bool {
        self.board.has_won(player, self.config.connect())
    }

    /// Full board with no winning run for either player.
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
            && !self.check_win(Player::Red)
            && !self.check_win(Player::Yellow)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.check_win(Player::Red) {
            Some(GameOutcome::Winner(Player::Red))
        } else if self.check_win(Player::Yellow) {
            Some(GameOutcome::Winner(Player::Yellow))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Column the computer should play next, or `None` when there is no move
    /// to make. Does not apply the move.
    pub fn find_best_move(&self) -> Option<usize> {
        self.analyze().map(|report| report.column)
    }

    /// Run the configured search and report the chosen column with its score
    /// and search statistics.
    pub fn analyze(&self) -> Option<SearchReport> {
        if self.board.valid_moves().is_empty() {
            return None;
        }

        // One scratch copy per call; the search itself works in place on it.
        let mut scratch = self.board;
        let mut searcher = Minimax::new(
            self.heuristic.as_ref(),
            self.config.connect(),
            self.config.computer(),
        );
        let (column, score) =
            searcher.search(&mut scratch, self.config.depth(), -INFINITY, INFINITY, true);
        let stats = searcher.stats();
        let column = column?;

        tracing::debug!(
            depth = self.config.depth(),
            column,
            score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        Some(SearchReport {
            column,
            score,
            stats,
        })
    }
}
