//! Grid rectification and cell segmentation built on top of `sudoku-scan-core`.
//!
//! Two pipeline stages live here:
//! 1. [`Rectifier`]: pick the best puzzle-boundary candidate from a
//!    [`QuadFinder`](sudoku_scan_core::QuadFinder) and warp it to a square.
//! 2. [`segment`]: split the square into 81 binarized, margin-trimmed cells.
//!
//! Default implementations of two injected capabilities ship alongside:
//! [`IntensityQuadFinder`] (Otsu dark-mass bounding box) and
//! [`HomographyWarper`] (4-point homography + bilinear warp).

mod quadfind;
mod rectify;
mod segment;
mod warp;

pub use quadfind::IntensityQuadFinder;
pub use rectify::{select_quad, Rectifier, RectifyParams, Roi};
pub use segment::{segment, SegmentParams};
pub use warp::HomographyWarper;
