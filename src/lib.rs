//! # Connect-N
//!
//! Connect-N (three to six in a row) on a 6x7 board against a computer
//! opponent that searches with depth-limited minimax and alpha-beta pruning.
//! Ships a terminal UI built with Ratatui and a headless benchmark mode.
//!
//! ## Modules
//!
//! - [`game`] — Board, cells, players, window scanning and win detection
//! - [`ai`] — Positional heuristic, alpha-beta search, random opponent
//! - [`engine`] — `GameEngine`: the owned live board and public game API
//! - [`match_runner`] — Headless engine-vs-random games
//! - [`ui`] — Terminal UI with a background worker for computer moves
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod match_runner;
pub mod ui;

pub use engine::{GameConfig, GameEngine, GameOutcome, SearchReport};
