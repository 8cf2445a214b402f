//! Core types and utilities for Sudoku photo recognition.
//!
//! This crate is intentionally small and free of any concrete detector,
//! warper, or classifier implementation. It provides the shared image and
//! board types, 4-point homography estimation, and the capability traits the
//! pipeline crates plug into.

mod board;
mod capabilities;
mod homography;
mod image;
mod logger;
mod quad;

pub use board::{Board, BoardParseError, BOARD_SIDE, BOX_SIDE, CELL_COUNT};
pub use capabilities::{CellImage, Classification, DigitClassifier, PerspectiveWarper, QuadFinder};
pub use homography::{homography_from_4pt, warp_perspective_gray, Homography};
pub use image::{
    dark_fraction, otsu_threshold, sample_bilinear, sample_bilinear_u8, GrayImage, GrayImageView,
};
pub use quad::Quadrilateral;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
