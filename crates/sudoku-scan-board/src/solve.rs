use log::debug;
use sudoku_scan_core::{Board, BOARD_SIDE, BOX_SIDE};

/// Solve by exhaustive backtracking.
///
/// Deterministic search: first empty cell in row-major order, digits tried
/// ascending, place/recurse/undo on an owned working copy. Returns the first
/// (for well-posed puzzles, the unique) completion, or `None` when no
/// completion exists. Whether `None` means "unsolvable puzzle" or "corrupted
/// input" is the caller's call.
pub fn solve(board: &Board) -> Option<Board> {
    let mut work = *board;
    if search(&mut work) {
        debug!("solve: completed from {} clue(s)", board.filled_count());
        Some(work)
    } else {
        debug!("solve: no completion from {} clue(s)", board.filled_count());
        None
    }
}

fn search(board: &mut Board) -> bool {
    let Some((row, col)) = board.first_empty() else {
        return true;
    };

    for digit in 1..=9u8 {
        if placement_allowed(board, row, col, digit) {
            board.set(row, col, digit);
            if search(board) {
                return true;
            }
            board.set(row, col, 0);
        }
    }

    false
}

/// A digit is allowed iff absent from the row, the column, and the 3x3 box.
fn placement_allowed(board: &Board, row: usize, col: usize, digit: u8) -> bool {
    for i in 0..BOARD_SIDE {
        if board.get(row, i) == digit || board.get(i, col) == digit {
            return false;
        }
    }

    let box_row = (row / BOX_SIDE) * BOX_SIDE;
    let box_col = (col / BOX_SIDE) * BOX_SIDE;
    for r in box_row..box_row + BOX_SIDE {
        for c in box_col..box_col + BOX_SIDE {
            if board.get(r, c) == digit {
                return false;
            }
        }
    }

    true
}
