use log::debug;
use serde::{Deserialize, Serialize};
use sudoku_scan_core::{GrayImage, GrayImageView, PerspectiveWarper, QuadFinder, Quadrilateral};

/// Region-of-interest hint in source-image pixels, supplied by the capture
/// layer when it already tracks an approximate puzzle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Configuration for puzzle-boundary selection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RectifyParams {
    /// Lower bound of the accepted width/height band.
    pub min_aspect: f32,
    /// Upper bound of the accepted width/height band.
    pub max_aspect: f32,
    /// Optional region-of-interest hint; candidate search is restricted to it.
    pub roi: Option<Roi>,
}

impl Default for RectifyParams {
    fn default() -> Self {
        Self {
            min_aspect: 0.7,
            max_aspect: 1.3,
            roi: None,
        }
    }
}

/// Select the best puzzle-boundary candidate.
///
/// Non-convex candidates and candidates outside the aspect band are dropped.
/// Among the rest: largest area wins, ties go to the aspect ratio closest
/// to 1.
pub fn select_quad(candidates: &[Quadrilateral], params: &RectifyParams) -> Option<Quadrilateral> {
    candidates
        .iter()
        .filter(|q| q.is_convex())
        .filter(|q| {
            let aspect = q.aspect_ratio();
            aspect >= params.min_aspect && aspect <= params.max_aspect
        })
        .max_by(|a, b| {
            a.area().total_cmp(&b.area()).then_with(|| {
                // equal area: prefer the one closer to square
                let da = (a.aspect_ratio() - 1.0).abs();
                let db = (b.aspect_ratio() - 1.0).abs();
                db.total_cmp(&da)
            })
        })
        .copied()
}

/// Locates the puzzle boundary and warps it to a square.
pub struct Rectifier<F, W> {
    finder: F,
    warper: W,
    params: RectifyParams,
}

impl<F: QuadFinder, W: PerspectiveWarper> Rectifier<F, W> {
    pub fn new(finder: F, warper: W, params: RectifyParams) -> Self {
        Self {
            finder,
            warper,
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &RectifyParams {
        &self.params
    }

    /// Find the puzzle boundary, if any.
    ///
    /// `None` is a signal, not an error: the orchestrator decides whether a
    /// fallback applies.
    pub fn locate(&self, image: &GrayImageView<'_>) -> Option<Quadrilateral> {
        let candidates = match self.params.roi {
            Some(roi) => {
                let sub = image.crop(roi.x, roi.y, roi.width, roi.height);
                if sub.is_empty() {
                    return None;
                }
                let mut found = self.finder.find_quads(&sub.view());
                for q in &mut found {
                    *q = offset_quad(q, roi.x as f32, roi.y as f32);
                }
                found
            }
            None => self.finder.find_quads(image),
        };
        debug!("rectify: {} candidate quad(s)", candidates.len());
        select_quad(&candidates, &self.params)
    }

    /// Warp `quad` to a square with side `min(image.width, image.height)`,
    /// so the segmenter can assume uniform cell geometry.
    pub fn rectify(&self, image: &GrayImageView<'_>, quad: &Quadrilateral) -> Option<GrayImage> {
        let side = image.width.min(image.height);
        self.warper.warp(image, quad, side)
    }
}

fn offset_quad(q: &Quadrilateral, dx: f32, dy: f32) -> Quadrilateral {
    let mut out = *q;
    for p in [
        &mut out.top_left,
        &mut out.top_right,
        &mut out.bottom_left,
        &mut out.bottom_right,
    ] {
        p.x += dx;
        p.y += dy;
    }
    out
}
