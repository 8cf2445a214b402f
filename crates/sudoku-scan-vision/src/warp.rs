use nalgebra::Point2;
use sudoku_scan_core::{
    homography_from_4pt, warp_perspective_gray, GrayImage, GrayImageView, PerspectiveWarper,
    Quadrilateral,
};

/// Default [`PerspectiveWarper`]: estimate the square-to-image homography from
/// the four corner correspondences and inverse-map every output pixel.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomographyWarper;

impl PerspectiveWarper for HomographyWarper {
    fn warp(
        &self,
        image: &GrayImageView<'_>,
        quad: &Quadrilateral,
        side: usize,
    ) -> Option<GrayImage> {
        if side == 0 || quad.area() <= f32::EPSILON {
            return None;
        }
        let s = side as f32;
        let square = [
            Point2::new(0.0_f32, 0.0),
            Point2::new(s, 0.0),
            Point2::new(s, s),
            Point2::new(0.0, s),
        ];
        let dst = quad.ring();

        let h_img_from_rect = homography_from_4pt(&square, &dst)?;
        Some(warp_perspective_gray(image, h_img_from_rect, side, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_quad_copies_region() {
        // 20x20 image, dark 10x10 block at (5,5)
        let mut img = GrayImage::filled(20, 20, 240);
        for y in 5..15 {
            for x in 5..15 {
                img.set(x, y, 20);
            }
        }

        let quad = Quadrilateral::from_rect(5.0, 5.0, 10.0, 10.0);
        let out = HomographyWarper
            .warp(&img.view(), &quad, 10)
            .expect("warpable");

        assert_eq!((out.width, out.height), (10, 10));
        // interior of the warped square is the dark block
        for y in 2..8 {
            for x in 2..8 {
                assert!(out.get(x, y) < 100, "pixel ({x},{y}) = {}", out.get(x, y));
            }
        }
    }

    #[test]
    fn degenerate_quad_fails() {
        let img = GrayImage::filled(10, 10, 128);
        let quad = Quadrilateral::from_rect(3.0, 3.0, 4.0, 0.0);
        assert!(HomographyWarper.warp(&img.view(), &quad, 8).is_none());
    }

    #[test]
    fn zero_side_fails() {
        let img = GrayImage::filled(10, 10, 128);
        let quad = Quadrilateral::from_rect(0.0, 0.0, 10.0, 10.0);
        assert!(HomographyWarper.warp(&img.view(), &quad, 0).is_none());
    }
}
