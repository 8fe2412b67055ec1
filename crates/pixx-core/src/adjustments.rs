//! Per-element tonal adjustments: brightness and contrast.
//!
//! Both operations keep the input shape and touch every channel identically.

use tracing::instrument;

use crate::error::PixxError;
use crate::saturate::saturate_i32;
use crate::types::{Image, ImageView};
use crate::validate::validate;

/// Midpoint that contrast scales around.
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Shift every element by `delta`, saturating at 0 and 255.
///
/// Any `delta` is accepted; values beyond ±255 saturate the whole image.
///
/// # Errors
///
/// Returns a [`PixxError::Shape`] if the input is not a valid image.
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn brightness(image: ImageView<'_>, delta: i32) -> Result<Image, PixxError> {
    let shape = validate(image)?;
    let pixels = image
        .data()
        .iter()
        .map(|&v| saturate_i32(i32::from(v).saturating_add(delta)))
        .collect();
    Ok(Image::from_parts(shape, pixels))
}

/// Scale every element's distance from the midpoint by `alpha`.
///
/// Formula: `output = round((input - 128) * alpha + 128)`, rounded half away
/// from zero, then saturated. `alpha = 1.0` leaves the image unchanged and a
/// negative `alpha` inverts around the midpoint.
///
/// # Errors
///
/// Returns a [`PixxError::Shape`] if the input is not a valid image.
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn contrast(image: ImageView<'_>, alpha: f32) -> Result<Image, PixxError> {
    let shape = validate(image)?;
    let pixels = image
        .data()
        .iter()
        .map(|&v| apply_contrast(v, alpha))
        .collect();
    Ok(Image::from_parts(shape, pixels))
}

#[inline]
fn apply_contrast(v: u8, alpha: f32) -> u8 {
    let scaled = (f32::from(v) - CONTRAST_PIVOT) * alpha + CONTRAST_PIVOT;
    // `as i32` saturates out-of-range floats and maps NaN to 0.
    saturate_i32(scaled.round() as i32)
}
