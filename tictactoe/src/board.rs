//! The 3x3 board and winning-line detection.

use crate::types::{Cell, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cells per row and per column.
pub const SIDE: usize = 3;

/// A winning triple of cell indices.
pub type Line = [usize; 3];

/// All winning lines, in detection order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid, addressed row-major by index 0..8.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// A completed line and the mark that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Winner {
    pub line: Line,
    pub mark: Mark,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a 9-character row-major pattern: `X`, `O`, and `.` or `-` for empty.
    /// Whitespace and `|` separators are ignored.
    pub fn from_pattern(pattern: &str) -> Result<Self, BoardError> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut index = 0usize;

        for c in pattern.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if index >= CELL_COUNT {
                return Err(BoardError::WrongLength(index + 1));
            }
            cells[index] = match c.to_ascii_uppercase() {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' | '-' => Cell::Empty,
                other => return Err(BoardError::InvalidCell(other)),
            };
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(BoardError::WrongLength(index));
        }
        Ok(Self { cells })
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Copy of this board with `index` set to `mark`.
    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = Cell::from(mark);
        self
    }
}

/// First line, in [`LINES`] order, whose three cells hold the same mark.
pub fn detect_winner(board: &Board) -> Option<Winner> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.cells[a].mark()?;
        (board.cells[b].mark() == Some(mark) && board.cells[c].mark() == Some(mark))
            .then_some(Winner { line, mark })
    })
}

/// 1-based (column, row) of a cell index.
pub fn coordinates(index: usize) -> (usize, usize) {
    (index % SIDE + 1, index / SIDE + 1)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let glyphs: Vec<String> = cells
                .iter()
                .map(|c| match c.mark() {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", glyphs.join(" | "))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board pattern must have 9 cells, got {0}")]
    WrongLength(usize),
    #[error("Invalid cell character: {0}")]
    InvalidCell(char),
}
