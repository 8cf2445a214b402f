use log::debug;
use serde::{Deserialize, Serialize};
use sudoku_scan_core::{otsu_threshold, GrayImageView, QuadFinder, Quadrilateral};

/// Default [`QuadFinder`]: Otsu-threshold the image and report the bounding
/// box of the dark mass as a single axis-aligned candidate.
///
/// This is a deliberately simple stand-in for a platform rectangle detector.
/// It handles the common capture case (dark grid on a light background,
/// roughly centered) and nothing more; deployments with access to a real
/// contour/rectangle detector should inject that instead.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IntensityQuadFinder {
    /// Minimal candidate side length relative to the shorter image side.
    /// Smaller dark regions (specks, single glyphs) are ignored.
    pub min_size_frac: f32,
}

impl Default for IntensityQuadFinder {
    fn default() -> Self {
        Self {
            min_size_frac: 0.5,
        }
    }
}

impl QuadFinder for IntensityQuadFinder {
    fn find_quads(&self, image: &GrayImageView<'_>) -> Vec<Quadrilateral> {
        // Contrast-free input (all-black, all-white) carries no boundary.
        let Some(threshold) = otsu_threshold(image.data) else {
            debug!("quadfind: no contrast, skipping");
            return Vec::new();
        };

        let mut min_x = usize::MAX;
        let mut min_y = usize::MAX;
        let mut max_x = 0usize;
        let mut max_y = 0usize;
        let mut seen = false;

        for y in 0..image.height {
            let row = &image.data[y * image.width..(y + 1) * image.width];
            for (x, &v) in row.iter().enumerate() {
                if v <= threshold {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                    seen = true;
                }
            }
        }

        if !seen {
            return Vec::new();
        }

        let w = (max_x - min_x + 1) as f32;
        let h = (max_y - min_y + 1) as f32;
        let min_side = self.min_size_frac * image.width.min(image.height) as f32;
        if w < min_side || h < min_side {
            debug!("quadfind: dark mass {w}x{h} below minimal size {min_side}");
            return Vec::new();
        }

        vec![Quadrilateral::from_rect(min_x as f32, min_y as f32, w, h)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sudoku_scan_core::GrayImage;

    fn framed_image(side: usize, frame: usize) -> GrayImage {
        let mut img = GrayImage::filled(side, side, 250);
        // dark frame resembling an outer grid border
        for i in frame..side - frame {
            img.set(i, frame, 10);
            img.set(i, side - frame - 1, 10);
            img.set(frame, i, 10);
            img.set(side - frame - 1, i, 10);
        }
        img
    }

    #[test]
    fn finds_dark_frame_bounding_box() {
        let img = framed_image(100, 10);
        let quads = IntensityQuadFinder::default().find_quads(&img.view());
        assert_eq!(quads.len(), 1);
        let q = quads[0];
        assert_abs_diff_eq!(q.top_left.x, 10.0, epsilon = 1e-3);
        assert_abs_diff_eq!(q.top_left.y, 10.0, epsilon = 1e-3);
        assert_abs_diff_eq!(q.area(), 80.0 * 80.0, epsilon = 1.0);
    }

    #[test]
    fn uniform_images_yield_no_candidates() {
        for luma in [0u8, 255u8] {
            let img = GrayImage::filled(64, 64, luma);
            assert!(
                IntensityQuadFinder::default()
                    .find_quads(&img.view())
                    .is_empty(),
                "luma {luma}"
            );
        }
    }

    #[test]
    fn small_specks_are_ignored() {
        let mut img = GrayImage::filled(100, 100, 250);
        img.set(50, 50, 0);
        img.set(52, 51, 0);
        let quads = IntensityQuadFinder::default().find_quads(&img.view());
        assert!(quads.is_empty());
    }
}
