use crate::{GrayImage, GrayImageView, Quadrilateral};

/// One segmented cell, ready for classification.
///
/// Owned by the segmenter until handed to the classifier; not retained after.
#[derive(Clone, Debug)]
pub struct CellImage {
    pub row: usize,
    pub col: usize,
    pub image: GrayImage,
}

/// Per-cell classifier output. `digit == 0` means "empty".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub digit: u8,
    pub confidence: f32,
}

impl Classification {
    pub const EMPTY: Self = Self {
        digit: 0,
        confidence: 1.0,
    };
}

/// Candidate quadrilateral detection over a grayscale image.
///
/// Implementations return raw candidates; selection (aspect band, area) is the
/// rectifier's job. Platform detectors (e.g. a Vision-framework rectangle
/// request) plug in here; a simple intensity-based default ships with the
/// vision crate.
pub trait QuadFinder {
    fn find_quads(&self, image: &GrayImageView<'_>) -> Vec<Quadrilateral>;
}

/// Perspective warp of a quadrilateral region onto an axis-aligned square.
pub trait PerspectiveWarper {
    /// Warp `quad` in `image` to a `side` x `side` square, or `None` when the
    /// corner geometry admits no projective mapping.
    fn warp(
        &self,
        image: &GrayImageView<'_>,
        quad: &Quadrilateral,
        side: usize,
    ) -> Option<GrayImage>;
}

/// Per-cell digit classifier, the "oracle" of the pipeline.
///
/// Deterministic test doubles implement this directly; production bindings
/// wrap whatever model runtime the host provides.
pub trait DigitClassifier {
    fn classify(&self, cell: &CellImage) -> Classification;
}
