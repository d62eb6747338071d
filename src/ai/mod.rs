//! Move selection: the positional heuristic, the alpha-beta minimax search
//! built on it, and a random opponent for headless matches.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{
    Heuristic, WindowHeuristic, BUILDING, CENTER_WEIGHT, COMPLETE_RUN, OPEN_THREAT,
    OPPONENT_THREAT,
};
pub use minimax::{Minimax, SearchStats, INFINITY};
pub use random::RandomAgent;
