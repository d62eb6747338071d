//! Board representation and rules: gravity drops, take-backs for search,
//! and connect-N detection over every window on the 6x7 grid.

mod board;
mod player;

pub use board::{windows, Board, Cell, MoveError, Window, CENTER_COL, COLS, ROWS};
pub use player::Player;
