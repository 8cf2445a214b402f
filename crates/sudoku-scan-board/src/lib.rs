//! Board assembly, validation, and solving.
//!
//! The three non-visual pipeline stages: turn 81 classified cells into a
//! [`Board`](sudoku_scan_core::Board), check it against Sudoku constraints
//! under uncertain recognition, and complete it by exhaustive backtracking.
//! A small presentation helper renders an original/solved comparison image.

mod assemble;
mod render;
mod solve;
mod verify;

pub use assemble::{assemble, AssembleParams};
pub use render::render_comparison;
pub use solve::solve;
pub use verify::{is_valid, MIN_CLUES_FOR_CHECK};
