use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use sudoku_scan_board::{assemble, is_valid, solve, AssembleParams};
use sudoku_scan_core::{
    Board, DigitClassifier, GrayImage, GrayImageView, PerspectiveWarper, QuadFinder,
};
use sudoku_scan_vision::{
    segment, HomographyWarper, IntensityQuadFinder, Rectifier, RectifyParams, SegmentParams,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors surfaced by [`Processor::process`].
///
/// The first four are the pipeline failure taxonomy, flat and exhaustive;
/// `Busy` and `Cancelled` report the single-flight and cancellation policies,
/// not processing failures.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    /// No qualifying puzzle boundary was found and no fallback applies.
    /// Recoverable: retake the photo or supply a region hint.
    #[error("no qualifying puzzle boundary found")]
    GridDetectionFailed,
    /// A grid was found but zero cells classified as non-empty.
    #[error("grid found but no digits recognized")]
    DigitRecognitionFailed,
    /// The assembled board violates Sudoku constraints (with enough filled
    /// cells for the check to be meaningful).
    #[error("assembled board violates sudoku constraints")]
    InvalidBoard,
    /// The board is well-formed but admits no completion; may indicate
    /// misrecognized digits.
    #[error("board admits no valid completion")]
    SolutionFailed,
    /// Another request is already in flight; this one was rejected, not
    /// queued.
    #[error("another request is already in flight")]
    Busy,
    /// The caller abandoned the request; partial state was dropped.
    #[error("request was cancelled")]
    Cancelled,
}

/// Successful pipeline output. Owned by the caller; nothing is retained.
#[derive(Clone, Debug)]
pub struct ProcessingResult {
    /// The board as recognized from the photo.
    pub original: Board,
    /// The completed board.
    pub solved: Board,
    /// The perspective-corrected square puzzle image.
    pub rectified: GrayImage,
}

/// Pipeline configuration: one nested block per stage plus fallback policy.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ProcessorParams {
    pub rectify: RectifyParams,
    pub segment: SegmentParams,
    pub assemble: AssembleParams,
    /// When no boundary is found, substitute an all-empty board and keep
    /// going instead of failing. A diagnostic/demo path (the solver then
    /// fills an empty puzzle), not a correctness feature.
    pub fallback_empty_board: bool,
}

/// Cooperative cancellation handle.
///
/// Clone it, hand one side to the caller, and the processor checks it between
/// stages. Cancelling never interrupts a stage mid-flight; in-progress
/// classifier calls complete and their results are dropped.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Clears the in-flight flag on every exit path.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The pipeline orchestrator and sole entry point for external callers.
///
/// Owns the three injected capabilities and the per-stage parameters. All
/// state below lives for one `process` call except the single-flight flag.
pub struct Processor<F, W, C> {
    rectifier: Rectifier<F, W>,
    classifier: C,
    params: ProcessorParams,
    in_flight: AtomicBool,
}

impl<C: DigitClassifier> Processor<IntensityQuadFinder, HomographyWarper, C> {
    /// Processor wired with the built-in quad finder and warper.
    pub fn with_defaults(classifier: C, params: ProcessorParams) -> Self {
        Self::new(
            IntensityQuadFinder::default(),
            HomographyWarper,
            classifier,
            params,
        )
    }
}

impl<F, W, C> Processor<F, W, C>
where
    F: QuadFinder,
    W: PerspectiveWarper,
    C: DigitClassifier,
{
    pub fn new(finder: F, warper: W, classifier: C, params: ProcessorParams) -> Self {
        Self {
            rectifier: Rectifier::new(finder, warper, params.rectify),
            classifier,
            params,
            in_flight: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn params(&self) -> &ProcessorParams {
        &self.params
    }

    /// Run the full pipeline on one image.
    ///
    /// At most one execution is active at a time: a second call while one is
    /// in flight is rejected with [`ProcessError::Busy`], never queued.
    pub fn process(&self, image: &GrayImageView<'_>) -> Result<ProcessingResult, ProcessError> {
        self.process_cancellable(image, &CancelHandle::new())
    }

    /// Like [`process`](Self::process), but checks `cancel` between stages
    /// and bails out with [`ProcessError::Cancelled`].
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, image, cancel),
            fields(width = image.width, height = image.height)
        )
    )]
    pub fn process_cancellable(
        &self,
        image: &GrayImageView<'_>,
        cancel: &CancelHandle,
    ) -> Result<ProcessingResult, ProcessError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ProcessError::Busy);
        }
        let _guard = FlightGuard(&self.in_flight);

        if cancel.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        let rectified = self.rectifier.locate(image).and_then(|quad| {
            debug!(
                "pipeline: boundary at area {:.0}, aspect {:.2}",
                quad.area(),
                quad.aspect_ratio()
            );
            self.rectifier.rectify(image, &quad)
        });

        let (original, rectified, fell_back) = match rectified {
            Some(rect) => {
                if cancel.is_cancelled() {
                    return Err(ProcessError::Cancelled);
                }
                let cells = segment(&rect.view(), &self.params.segment);
                if cancel.is_cancelled() {
                    return Err(ProcessError::Cancelled);
                }
                let board = assemble(&cells, &self.params.assemble, &self.classifier);
                (board, rect, false)
            }
            None if self.params.fallback_empty_board => {
                info!("pipeline: no boundary found, falling back to an empty board");
                let side = image.width.min(image.height);
                (Board::empty(), GrayImage::filled(side, side, 255), true)
            }
            None => return Err(ProcessError::GridDetectionFailed),
        };

        if cancel.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        if !fell_back && original.filled_count() == 0 {
            return Err(ProcessError::DigitRecognitionFailed);
        }

        if !is_valid(&original) {
            debug!("pipeline: invalid board\n{}", original.to_grid_string());
            return Err(ProcessError::InvalidBoard);
        }

        if cancel.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        let solved = solve(&original).ok_or(ProcessError::SolutionFailed)?;
        info!(
            "pipeline: solved from {} recognized digit(s)",
            original.filled_count()
        );

        Ok(ProcessingResult {
            original,
            solved,
            rectified,
        })
    }
}
