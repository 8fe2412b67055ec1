//! Grayscale conversion using ITU-R BT.601 luma coefficients.

use tracing::instrument;

use crate::error::PixxError;
use crate::saturate::saturate_i32;
use crate::types::{Image, ImageView, ImgShape};
use crate::validate::validate;

/// BT.601 coefficient for the first (red) channel.
pub const LUMA_R: f64 = 0.299;

/// BT.601 coefficient for the second (green) channel.
pub const LUMA_G: f64 = 0.587;

/// BT.601 coefficient for the third (blue) channel.
pub const LUMA_B: f64 = 0.114;

/// Luma of one RGB pixel, rounded half away from zero.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * f64::from(r) + LUMA_G * f64::from(g) + LUMA_B * f64::from(b);
    saturate_i32(y.round() as i32)
}

/// Convert an image to a single-channel (H, W, 1) luma image.
///
/// Single-channel input is copied through unchanged. Three-channel input is
/// read as R, G, B in that order.
///
/// # Errors
///
/// Returns a [`PixxError::Shape`] if the input is not a valid image.
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn to_gray(image: ImageView<'_>) -> Result<Image, PixxError> {
    let shape = validate(image)?;
    let src = image.data();

    if shape.channels == 1 {
        return Ok(Image::from_parts(shape, src.to_vec()));
    }

    let out_shape = ImgShape {
        channels: 1,
        ..shape
    };
    let pixels = src
        .chunks_exact(3)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect();

    Ok(Image::from_parts(out_shape, pixels))
}
