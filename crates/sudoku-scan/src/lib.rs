//! High-level facade crate for the `sudoku-scan-*` workspace.
//!
//! Turns a photograph of a 9x9 Sudoku into a verified, solved grid:
//! boundary detection -> perspective rectification -> cell segmentation ->
//! digit classification -> constraint verification -> backtracking solve.
//!
//! The three externally supplied capabilities (boundary detection,
//! perspective warp, digit classification) are trait objects the caller can
//! swap; simple defaults ship with the workspace so the pipeline runs
//! end-to-end out of the box.
//!
//! ## Quickstart
//!
//! ```no_run
//! use sudoku_scan::{Processor, ProcessorParams};
//! use sudoku_scan::core::{CellImage, Classification, DigitClassifier};
//!
//! struct MyClassifier;
//! impl DigitClassifier for MyClassifier {
//!     fn classify(&self, _cell: &CellImage) -> Classification {
//!         // bind your model runtime here
//!         Classification::EMPTY
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::ImageReader::open("puzzle.jpg")?.decode()?.to_luma8();
//! let processor = Processor::with_defaults(MyClassifier, ProcessorParams::default());
//! let result = processor.process(&sudoku_scan::adapt::gray_view(&img))?;
//! println!("solved:\n{}", result.solved.to_grid_string());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `sudoku_scan::core`: image/board types, homographies, capability traits.
//! - `sudoku_scan::vision`: rectifier, segmenter, default finder/warper.
//! - `sudoku_scan::board`: assembler, verifier, solver, comparison renderer.
//! - `sudoku_scan::adapt` (feature `image`): adapters from `image::GrayImage`
//!   and raw grayscale buffers.

pub use sudoku_scan_board as board;
pub use sudoku_scan_core as core;
pub use sudoku_scan_vision as vision;

pub use sudoku_scan_board::render_comparison;
pub use sudoku_scan_core::{Board, CellImage, Classification, GrayImage, GrayImageView};

mod pipeline;

pub use pipeline::{CancelHandle, ProcessError, ProcessingResult, Processor, ProcessorParams};

#[cfg(feature = "image")]
pub mod adapt;
