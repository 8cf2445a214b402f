#[derive(Clone, Copy, Debug)]
pub struct GrayImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Allocate an image filled with a single luma value.
    pub fn filled(width: usize, height: usize, luma: u8) -> Self {
        Self {
            width,
            height,
            data: vec![luma; width * height],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn view(&self) -> GrayImageView<'_> {
        GrayImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, luma: u8) {
        self.data[y * self.width + x] = luma;
    }

    /// Copy out the axis-aligned sub-image `[x, x+w) x [y, y+h)`.
    ///
    /// The rectangle is clamped to the image bounds; a rectangle fully outside
    /// the image yields a 0x0 image.
    pub fn crop(&self, x: usize, y: usize, w: usize, h: usize) -> GrayImage {
        self.view().crop(x, y, w, h)
    }
}

impl<'a> GrayImageView<'a> {
    /// Copy out the axis-aligned sub-image `[x, x+w) x [y, y+h)`, clamped to
    /// the view bounds.
    pub fn crop(&self, x: usize, y: usize, w: usize, h: usize) -> GrayImage {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        if x >= x1 || y >= y1 {
            return GrayImage::default();
        }
        let (cw, ch) = (x1 - x, y1 - y);
        let mut data = Vec::with_capacity(cw * ch);
        for row in y..y1 {
            let start = row * self.width + x;
            data.extend_from_slice(&self.data[start..start + cw]);
        }
        GrayImage {
            width: cw,
            height: ch,
            data,
        }
    }
}

#[inline]
fn get_gray(src: &GrayImageView<'_>, x: i32, y: i32) -> u8 {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return 0;
    }
    src.data[y as usize * src.width + x as usize]
}

#[inline]
pub fn sample_bilinear(src: &GrayImageView<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_gray(src, x0, y0) as f32;
    let p10 = get_gray(src, x0 + 1, y0) as f32;
    let p01 = get_gray(src, x0, y0 + 1) as f32;
    let p11 = get_gray(src, x0 + 1, y0 + 1) as f32;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

#[inline]
pub fn sample_bilinear_u8(src: &GrayImageView<'_>, x: f32, y: f32) -> u8 {
    sample_bilinear(src, x, y).clamp(0.0, 255.0) as u8
}

/// Fraction of pixels darker than `dark_luma`.
///
/// An empty (0x0) image reports 0.0, so degenerate cells read as blank.
pub fn dark_fraction(src: &GrayImageView<'_>, dark_luma: u8) -> f32 {
    let total = src.width * src.height;
    if total == 0 {
        return 0.0;
    }
    let dark = src.data.iter().filter(|&&v| v < dark_luma).count();
    dark as f32 / total as f32
}

/// Compute an Otsu threshold over the pixel intensities.
///
/// Returns `None` for empty or contrast-free (single-intensity) input, where
/// no meaningful foreground/background split exists.
pub fn otsu_threshold(samples: &[u8]) -> Option<u8> {
    if samples.is_empty() {
        return None;
    }

    let mut min_v = 255u8;
    let mut max_v = 0u8;
    for &v in samples {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v == max_v {
        return None;
    }

    let mut hist = [0u32; 256];
    for &v in samples {
        hist[v as usize] += 1;
    }

    let total = samples.len() as f64;
    let mut sum_total = 0f64;
    for (i, &h) in hist.iter().enumerate() {
        sum_total += (i as f64) * (h as f64);
    }

    let mut sum_b = 0f64;
    let mut w_b = 0f64;
    let mut best_var = -1f64;
    let mut best_t = ((min_v as u16 + max_v as u16) / 2) as u8;

    for (t, &h) in hist.iter().enumerate() {
        w_b += h as f64;
        if w_b < 1.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f < 1.0 {
            break;
        }

        sum_b += (t as f64) * (h as f64);
        let m_b = sum_b / w_b;
        let m_f = (sum_total - sum_b) / w_f;

        let var_between = w_b * w_f * (m_b - m_f) * (m_b - m_f);
        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    Some(best_t)
}
