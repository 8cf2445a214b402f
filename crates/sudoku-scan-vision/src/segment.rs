use log::debug;
use serde::{Deserialize, Serialize};
use sudoku_scan_core::{otsu_threshold, CellImage, GrayImage, GrayImageView, BOARD_SIDE};

/// Configuration for cell segmentation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SegmentParams {
    /// Symmetric per-side crop applied after binarization, as a fraction of
    /// the shorter cell side. Discards grid-line bleed at the cell border.
    pub margin_frac: f32,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self { margin_frac: 0.15 }
    }
}

/// Split a rectified square image into 81 binarized, margin-trimmed cells in
/// row-major order.
///
/// Cell size is `floor(side / 9)`; remainder pixels at the right/bottom edge
/// are discarded. This never fails: an image smaller than 9x9 pixels yields
/// 81 empty (0x0) cells, which read as "no digit" downstream.
pub fn segment(rectified: &GrayImageView<'_>, params: &SegmentParams) -> Vec<CellImage> {
    let cell_w = rectified.width / BOARD_SIDE;
    let cell_h = rectified.height / BOARD_SIDE;

    if cell_w == 0 || cell_h == 0 {
        debug!(
            "segment: degenerate {}x{} input, producing empty cells",
            rectified.width, rectified.height
        );
        return (0..BOARD_SIDE * BOARD_SIDE)
            .map(|i| CellImage {
                row: i / BOARD_SIDE,
                col: i % BOARD_SIDE,
                image: GrayImage::default(),
            })
            .collect();
    }

    let margin = (cell_w.min(cell_h) as f32 * params.margin_frac) as usize;

    let mut cells = Vec::with_capacity(BOARD_SIDE * BOARD_SIDE);
    for row in 0..BOARD_SIDE {
        for col in 0..BOARD_SIDE {
            let raw = rectified.crop(col * cell_w, row * cell_h, cell_w, cell_h);
            let binarized = binarize(&raw);
            let trimmed = binarized.crop(
                margin,
                margin,
                cell_w.saturating_sub(2 * margin),
                cell_h.saturating_sub(2 * margin),
            );
            cells.push(CellImage {
                row,
                col,
                image: trimmed,
            });
        }
    }
    cells
}

/// Per-cell adaptive binarization to {0, 255}.
///
/// Contrast-free cells fall back to a fixed mid-gray split, so a flat dark
/// cell stays dark and a flat light cell stays light.
fn binarize(cell: &GrayImage) -> GrayImage {
    let data = match otsu_threshold(&cell.data) {
        Some(t) => cell
            .data
            .iter()
            .map(|&v| if v <= t { 0 } else { 255 })
            .collect(),
        None => cell
            .data
            .iter()
            .map(|&v| if v < 128 { 0 } else { 255 })
            .collect(),
    };
    GrayImage {
        width: cell.width,
        height: cell.height,
        data,
    }
}
