use log::debug;
use serde::{Deserialize, Serialize};
use sudoku_scan_core::{dark_fraction, Board, CellImage, DigitClassifier};

/// Thresholds for turning cell classifications into board values.
///
/// These are untuned defaults, kept as configuration rather than constants so
/// a deployment can calibrate them against its own classifier without
/// touching pipeline logic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AssembleParams {
    /// Luma below which a pixel counts as "dark".
    pub dark_luma: u8,
    /// Minimal dark-pixel fraction for a cell to be considered occupied.
    /// Below this the classifier is not consulted at all.
    pub min_dark_frac: f32,
    /// Classifier confidence must be strictly greater than this for the digit
    /// to be accepted; at or below, the cell is recorded as empty.
    pub min_confidence: f32,
}

impl Default for AssembleParams {
    fn default() -> Self {
        Self {
            dark_luma: 100,
            min_dark_frac: 0.05,
            min_confidence: 0.5,
        }
    }
}

/// Assemble 81 cell classifications into a board.
///
/// Near-blank cells short-circuit to empty without invoking the classifier:
/// blank cells are the common case and classifiers misfire on them. A
/// low-confidence digit likewise degrades to empty rather than being guessed,
/// since a wrong digit corrupts verification and solving while a missed one
/// merely looks empty.
pub fn assemble<C: DigitClassifier>(
    cells: &[CellImage],
    params: &AssembleParams,
    classifier: &C,
) -> Board {
    let mut board = Board::empty();
    let mut classified = 0usize;

    for cell in cells {
        if dark_fraction(&cell.image.view(), params.dark_luma) < params.min_dark_frac {
            continue;
        }

        let result = classifier.classify(cell);
        classified += 1;
        if result.digit >= 1 && result.digit <= 9 && result.confidence > params.min_confidence {
            board.set(cell.row, cell.col, result.digit);
        } else {
            debug!(
                "assemble: cell ({},{}) rejected (digit {}, confidence {:.2})",
                cell.row, cell.col, result.digit, result.confidence
            );
        }
    }

    debug!(
        "assemble: {} cell(s) classified, {} digit(s) accepted",
        classified,
        board.filled_count()
    );
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use sudoku_scan_core::{Classification, GrayImage};

    struct ScriptedClassifier {
        digit: u8,
        confidence: f32,
        calls: Cell<usize>,
    }

    impl ScriptedClassifier {
        fn new(digit: u8, confidence: f32) -> Self {
            Self {
                digit,
                confidence,
                calls: Cell::new(0),
            }
        }
    }

    impl DigitClassifier for ScriptedClassifier {
        fn classify(&self, _cell: &CellImage) -> Classification {
            self.calls.set(self.calls.get() + 1);
            Classification {
                digit: self.digit,
                confidence: self.confidence,
            }
        }
    }

    fn blank_cell(row: usize, col: usize) -> CellImage {
        CellImage {
            row,
            col,
            image: GrayImage::filled(10, 10, 255),
        }
    }

    fn inked_cell(row: usize, col: usize) -> CellImage {
        let mut image = GrayImage::filled(10, 10, 255);
        for i in 0..10 {
            image.set(i, 4, 0);
        }
        CellImage { row, col, image }
    }

    #[test]
    fn blank_cells_skip_the_classifier() {
        let classifier = ScriptedClassifier::new(7, 0.99);
        let cells = vec![blank_cell(0, 0), blank_cell(4, 4)];
        let board = assemble(&cells, &AssembleParams::default(), &classifier);
        assert_eq!(board.filled_count(), 0);
        assert_eq!(classifier.calls.get(), 0);
    }

    #[test]
    fn confident_digit_lands_at_its_coordinate() {
        let classifier = ScriptedClassifier::new(7, 0.99);
        let cells = vec![inked_cell(2, 5)];
        let board = assemble(&cells, &AssembleParams::default(), &classifier);
        assert_eq!(board.get(2, 5), 7);
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn confidence_exactly_at_threshold_is_rejected() {
        // threshold is strict: > 0.5, not >= 0.5
        let classifier = ScriptedClassifier::new(3, 0.5);
        let cells = vec![inked_cell(0, 0)];
        let board = assemble(&cells, &AssembleParams::default(), &classifier);
        assert_eq!(board.filled_count(), 0);
        assert_eq!(classifier.calls.get(), 1);
    }

    #[test]
    fn out_of_range_digit_is_rejected() {
        let classifier = ScriptedClassifier::new(0, 0.99);
        let cells = vec![inked_cell(0, 0)];
        let board = assemble(&cells, &AssembleParams::default(), &classifier);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn empty_cell_images_read_as_blank() {
        let classifier = ScriptedClassifier::new(9, 0.9);
        let cells = vec![CellImage {
            row: 0,
            col: 0,
            image: GrayImage::default(),
        }];
        let board = assemble(&cells, &AssembleParams::default(), &classifier);
        assert_eq!(board.filled_count(), 0);
        assert_eq!(classifier.calls.get(), 0);
    }
}
