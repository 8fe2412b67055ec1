//! Seeded uniform integer noise.
//!
//! # Reproducibility
//!
//! Each call builds its own generator from the caller's seed and draws exactly
//! one value per element in row-major order (rows, then columns, then
//! channels). The same seed and shape therefore always yield the same noise
//! field, and concurrent calls never share generator state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::error::{ArgumentError, PixxError};
use crate::saturate::saturate_i32;
use crate::types::{Image, ImageView};
use crate::validate::validate;

/// Add noise drawn uniformly from `[-amp, amp]` to every element.
///
/// `amp = 0` returns an exact copy.
///
/// # Errors
///
/// - [`ArgumentError::NegativeAmplitude`] if `amp < 0`. This is checked before
///   the image shape, so it wins even when the shape is also invalid.
/// - [`PixxError::Shape`] if the input is not a valid image.
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn add_noise(image: ImageView<'_>, amp: i32, seed: u64) -> Result<Image, PixxError> {
    if amp < 0 {
        debug!(amp, "rejecting negative noise amplitude");
        return Err(ArgumentError::NegativeAmplitude(amp).into());
    }
    let shape = validate(image)?;

    let mut rng = StdRng::seed_from_u64(seed);
    // The buffer is row-major, so a flat walk is the (y, x, c) visiting order.
    let pixels = image
        .data()
        .iter()
        .map(|&v| {
            let noise = rng.random_range(-amp..=amp);
            saturate_i32(i32::from(v).saturating_add(noise))
        })
        .collect();

    Ok(Image::from_parts(shape, pixels))
}
