use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, style::Color, Terminal};

use crate::engine::{GameConfig, GameEngine, GameOutcome};
use crate::game::{Board, Player, CENTER_COL, COLS};

/// What the worker thread hands back after the computer's turn.
struct ComputerMove {
    engine: GameEngine,
    column: Option<usize>,
}

pub struct App {
    config: GameConfig,
    /// `None` while the worker thread owns the engine.
    engine: Option<GameEngine>,
    /// Snapshot of the live board, for rendering.
    board: Board,
    to_move: Player,
    outcome: Option<GameOutcome>,
    worker: Option<Receiver<ComputerMove>>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut app = App {
            config,
            engine: None,
            board: Board::new(),
            to_move: Player::Red,
            outcome: None,
            worker: None,
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
        };
        app.start_game();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.poll_worker();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Throw away the current game (and any search in flight) and start over.
    fn start_game(&mut self) {
        // Dropping the receiver discards a pending computer move
        self.worker = None;
        self.engine = Some(GameEngine::new(self.config));
        self.board = Board::new();
        self.to_move = Player::Red;
        self.outcome = None;
        self.selected_column = CENTER_COL;

        if self.config.computer() == Player::Red {
            self.spawn_computer_move();
        }
    }

    fn is_thinking(&self) -> bool {
        self.worker.is_some()
    }

    /// Hand the engine to a worker thread that picks and plays the
    /// computer's move, so the UI stays responsive during the search.
    fn spawn_computer_move(&mut self) {
        let Some(mut engine) = self.engine.take() else {
            return;
        };
        let computer = self.config.computer();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let column = engine.find_best_move();
            if let Some(col) = column {
                engine.play(col, computer);
            }
            // The UI may have restarted and dropped the receiver
            let _ = tx.send(ComputerMove { engine, column });
        });

        self.worker = Some(rx);
    }

    /// Pick up the computer's move if the worker has finished.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.worker else {
            return;
        };

        match rx.try_recv() {
            Ok(ComputerMove { engine, column }) => {
                self.worker = None;
                self.board = *engine.board();
                self.engine = Some(engine);
                match column {
                    Some(col) => {
                        self.message = Some(format!("Computer plays column {col}"));
                        self.to_move = self.config.human();
                        self.update_outcome();
                    }
                    None => {
                        self.outcome = Some(GameOutcome::Draw);
                        self.message = Some("No moves available. It's a draw!".to_string());
                    }
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tracing::error!("computer move worker exited without a result");
                self.worker = None;
                self.message = Some("Computer player failed. Press 'r' to restart.".to_string());
            }
        }
    }

    /// Record a finished game and announce it.
    fn update_outcome(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };

        let outcome = if engine.check_win(Player::Red) {
            Some(GameOutcome::Winner(Player::Red))
        } else if engine.check_win(Player::Yellow) {
            Some(GameOutcome::Winner(Player::Yellow))
        } else if engine.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.message = Some(match outcome {
                GameOutcome::Winner(p) if p == self.config.human() => "You win!".to_string(),
                GameOutcome::Winner(_) => "Computer wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
            tracing::info!(outcome = ?outcome, "game over");
        }
        self.outcome = outcome;
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '0'..='6') => {
                let col = c as usize - '0' as usize;
                self.selected_column = col;
                self.drop_piece(col);
            }
            KeyCode::Char('r') => {
                self.start_game();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Play the human's piece, then hand over to the computer.
    fn drop_piece(&mut self, column: usize) {
        if self.outcome.is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_thinking() {
            self.message = Some("Computer is thinking...".to_string());
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        if !engine.play(column, self.config.human()) {
            self.message = Some("Column is full!".to_string());
            return;
        }
        self.board = *engine.board();
        self.message = None;
        self.update_outcome();

        if self.outcome.is_none() {
            self.to_move = self.config.computer();
            self.spawn_computer_move();
        }
    }

    fn status(&self) -> (String, Color) {
        let color = match self.to_move {
            Player::Red => Color::Red,
            Player::Yellow => Color::Yellow,
        };
        let status = if self.outcome.is_some() {
            "Game Over".to_string()
        } else if self.is_thinking() {
            "Computer is thinking...".to_string()
        } else {
            format!("Your move ({})", self.config.human().name())
        };
        (status, color)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let (status, color) = self.status();
        super::game_view::render(
            frame,
            &self.board,
            &self.config,
            self.selected_column,
            (&status, color),
            &self.message,
        );
    }
}
