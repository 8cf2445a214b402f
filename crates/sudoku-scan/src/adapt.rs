//! Adapters between `image` crate buffers and the internal gray types.

use sudoku_scan_core::{GrayImage, GrayImageView};

/// Errors produced when adapting raw grayscale buffers.
#[derive(thiserror::Error, Debug)]
pub enum ImageAdaptError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },
}

/// Borrow an `image::GrayImage` as the lightweight core view type.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Build an `image::GrayImage` from a raw grayscale buffer.
pub fn gray_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::GrayImage, ImageAdaptError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(ImageAdaptError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(ImageAdaptError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(ImageAdaptError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::GrayImage::from_raw(width, height, pixels.to_vec())
        .ok_or(ImageAdaptError::InvalidGrayDimensions { width, height })
}

/// Copy an internal gray image into an `image::GrayImage`, e.g. for saving a
/// rectified puzzle or a rendered comparison to disk.
pub fn to_image(img: &GrayImage) -> Option<::image::GrayImage> {
    ::image::GrayImage::from_raw(img.width as u32, img.height as u32, img.data.clone())
}
