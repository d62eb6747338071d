//! Terminal UI for playing against the computer. The computer's search runs
//! on a worker thread so the board keeps redrawing while it thinks.

mod app;
mod game_view;

pub use app::App;
