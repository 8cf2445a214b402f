use std::fmt::{self, Display};
use std::str::FromStr;

/// Cells per side.
pub const BOARD_SIDE: usize = 9;
/// Cells per side of one sub-box.
pub const BOX_SIDE: usize = 3;
/// Total cell count.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A 9x9 Sudoku board, row-major, `0` marking an empty cell.
///
/// Plain value type with copy semantics: every pipeline stage works on its own
/// snapshot, nothing is shared.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// All-empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build from nested rows. Values must already be in `0..=9`.
    pub fn from_rows(rows: [[u8; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                debug_assert!(v <= 9);
                board.set(r, c, v);
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * BOARD_SIDE + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * BOARD_SIDE + col] = value;
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .map(|i| (i / BOARD_SIDE, i % BOARD_SIDE))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}

/// Compact 81-character dump, `_` for empty cells, row-major.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &v in &self.cells {
            if v == 0 {
                f.write_str("_")?;
            } else {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Multi-line grid dump with box separators, for logs and debugging.
    pub fn to_grid_string(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIDE {
            if row % BOX_SIDE == 0 && row != 0 {
                out.push_str("- - - - - - - - - - -\n");
            }
            for col in 0..BOARD_SIDE {
                if col % BOX_SIDE == 0 && col != 0 {
                    out.push_str("| ");
                }
                let v = self.get(row, col);
                if v == 0 {
                    out.push_str("_ ");
                } else {
                    out.push_str(&format!("{v} "));
                }
            }
            out.push('\n');
        }
        out
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
}

/// Parse an 81-character puzzle string, row-major.
///
/// Digits `1..=9` fill cells; `0`, `.` and `_` all denote an empty cell.
/// Whitespace is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut i = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if i >= CELL_COUNT {
                return Err(BoardParseError::WrongLength(i + 1));
            }
            let v = match ch {
                '0' | '.' | '_' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            board.cells[i] = v;
            i += 1;
        }
        if i != CELL_COUNT {
            return Err(BoardParseError::WrongLength(i));
        }
        Ok(board)
    }
}
