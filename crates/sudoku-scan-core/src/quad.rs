use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A candidate puzzle boundary in source-image pixel coordinates.
///
/// Corner order is fixed: top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub top_left: Point2<f32>,
    pub top_right: Point2<f32>,
    pub bottom_left: Point2<f32>,
    pub bottom_right: Point2<f32>,
}

impl Quadrilateral {
    /// Axis-aligned rectangle as a quadrilateral.
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            top_left: Point2::new(x, y),
            top_right: Point2::new(x + w, y),
            bottom_left: Point2::new(x, y + h),
            bottom_right: Point2::new(x + w, y + h),
        }
    }

    /// Corners in winding order TL -> TR -> BR -> BL.
    #[inline]
    pub fn ring(&self) -> [Point2<f32>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Area via the shoelace formula.
    pub fn area(&self) -> f32 {
        let ring = self.ring();
        let mut acc = 0.0_f32;
        for i in 0..4 {
            let a = ring[i];
            let b = ring[(i + 1) % 4];
            acc += a.x * b.y - b.x * a.y;
        }
        acc.abs() * 0.5
    }

    /// Width/height ratio from averaged opposite-edge lengths.
    ///
    /// Returns `f32::INFINITY` for a degenerate (zero-height) quad.
    pub fn aspect_ratio(&self) -> f32 {
        let top = dist(self.top_left, self.top_right);
        let bottom = dist(self.bottom_left, self.bottom_right);
        let left = dist(self.top_left, self.bottom_left);
        let right = dist(self.top_right, self.bottom_right);

        let w = 0.5 * (top + bottom);
        let h = 0.5 * (left + right);
        if h <= f32::EPSILON {
            return f32::INFINITY;
        }
        w / h
    }

    /// True when all cross products along the ring share a sign.
    pub fn is_convex(&self) -> bool {
        let ring = self.ring();
        let mut sign = 0.0_f32;
        for i in 0..4 {
            let a = ring[i];
            let b = ring[(i + 1) % 4];
            let c = ring[(i + 2) % 4];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }
}

#[inline]
fn dist(a: Point2<f32>, b: Point2<f32>) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
