use std::fmt;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;

/// Step directions for runs: horizontal, vertical, diagonal `\` and diagonal `/`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A run of `len` cells starting at (`row`, `col`) and stepping by (`dr`, `dc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    len: usize,
}

/// Every window of length `len` that fits on the board, in all four directions.
pub fn windows(len: usize) -> impl Iterator<Item = Window> {
    debug_assert!((1..=ROWS).contains(&len), "window length {len} does not fit");

    DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
        let rows = match dr {
            0 => 0..ROWS,
            1 => 0..ROWS + 1 - len,
            _ => len - 1..ROWS,
        };
        let cols = if dc == 0 { 0..COLS } else { 0..COLS + 1 - len };
        rows.flat_map(move |row| {
            cols.clone().map(move |col| Window {
                row,
                col,
                dr,
                dc,
                len,
            })
        })
    })
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still take a piece, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Remove the most recently dropped piece from a column.
    ///
    /// Only search uses this, to take back a trial move made with
    /// [`Board::drop_piece`]. The column must not be empty.
    pub fn undo_piece(&mut self, col: usize) {
        let top = (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty);
        debug_assert!(top.is_some(), "undo on empty column {col}");
        if let Some(row) = top {
            self.cells[row][col] = Cell::Empty;
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of `player`'s pieces in a column
    pub fn count_in_column(&self, col: usize, player: Player) -> usize {
        let cell = player.to_cell();
        (0..ROWS).filter(|&row| self.cells[row][col] == cell).count()
    }

    /// Cells covered by a window, in step order
    pub fn window_cells(&self, window: Window) -> impl Iterator<Item = Cell> + '_ {
        (0..window.len).map(move |i| {
            let row = (window.row as isize + window.dr * i as isize) as usize;
            let col = (window.col as isize + window.dc * i as isize) as usize;
            self.cells[row][col]
        })
    }

    /// Check whether `player` owns `connect` cells in a row anywhere on the board
    pub fn has_won(&self, player: Player, connect: usize) -> bool {
        let cell = player.to_cell();
        windows(connect).any(|w| self.window_cells(w).all(|c| c == cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendering: one `|`-separated line per row, then a column legend.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                let marker = match cell {
                    Cell::Empty => ' ',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{marker}|")?;
            }
            writeln!(f)?;
        }
        let legend: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        writeln!(f, " {}", legend.join(" "))
    }
}
