//! Seeded random crop.
//!
//! The window origin is drawn from a generator local to the call: first the
//! row offset `y0`, then the column offset `x0`. Keeping that order is what
//! makes a seed reproduce the same window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::error::{ArgumentError, PixxError};
use crate::types::{Image, ImageView, ImgShape};
use crate::validate::validate;

/// Cut a random `out_h x out_w` window out of an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `out_h` - Window height in rows
/// * `out_w` - Window width in columns
/// * `seed` - Seed for the window position
///
/// # Returns
///
/// A new (out_h, out_w, C) image. A full-size window returns an exact copy
/// regardless of seed.
///
/// # Errors
///
/// Checked in this order:
/// - [`PixxError::Shape`] if the input is not a valid image
/// - [`ArgumentError::BadCropSize`] if either size is not positive
/// - [`ArgumentError::CropExceedsImage`] if the window is larger than the image
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn random_crop(
    image: ImageView<'_>,
    out_h: i64,
    out_w: i64,
    seed: u64,
) -> Result<Image, PixxError> {
    let shape = validate(image)?;

    let (crop_h, crop_w) = match (positive(out_h), positive(out_w)) {
        (Some(h), Some(w)) => (h, w),
        _ => {
            debug!("rejecting non-positive crop size");
            return Err(ArgumentError::BadCropSize { out_h, out_w }.into());
        }
    };
    if crop_h > shape.height || crop_w > shape.width {
        debug!("rejecting crop larger than image");
        return Err(ArgumentError::CropExceedsImage {
            out_h: crop_h,
            out_w: crop_w,
            height: shape.height,
            width: shape.width,
        }
        .into());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let y0 = rng.random_range(0..=shape.height - crop_h);
    let x0 = rng.random_range(0..=shape.width - crop_w);
    debug!(y0, x0, "crop window");

    Ok(extract_window(image.data(), shape, y0, x0, crop_h, crop_w))
}

/// Copy the window `[y0, y0 + crop_h) x [x0, x0 + crop_w)` across all channels.
fn extract_window(
    src: &[u8],
    shape: ImgShape,
    y0: usize,
    x0: usize,
    crop_h: usize,
    crop_w: usize,
) -> Image {
    let out_shape = ImgShape {
        height: crop_h,
        width: crop_w,
        channels: shape.channels,
    };
    let row_len = crop_w * shape.channels;
    let mut output = Vec::with_capacity(out_shape.len());

    // Each output row is one contiguous run in the source.
    for y in 0..crop_h {
        let start = shape.index(y0 + y, x0, 0);
        output.extend_from_slice(&src[start..start + row_len]);
    }

    Image::from_parts(out_shape, output)
}

/// `Some(v)` for strictly positive values that fit in `usize`.
pub(crate) fn positive(v: i64) -> Option<usize> {
    if v > 0 {
        usize::try_from(v).ok()
    } else {
        None
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=40, 1usize..=40)
    }

    /// Create a test image with unique row/column encoding in two channels.
    fn create_test_image(height: usize, width: usize) -> Image {
        let mut pixels = Vec::with_capacity(height * width * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.push(y as u8);
                pixels.push(x as u8);
                pixels.push(0);
            }
        }
        Image::new(height, width, 3, pixels).unwrap()
    }

    proptest! {
        /// Property: output has exactly the requested shape.
        #[test]
        fn prop_output_shape(
            (height, width) in dimensions_strategy(),
            frac_h in 0.0f64..=1.0,
            frac_w in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let img = create_test_image(height, width);
            let out_h = ((height as f64 * frac_h).ceil() as i64).max(1);
            let out_w = ((width as f64 * frac_w).ceil() as i64).max(1);
            let result = random_crop(img.view(), out_h, out_w, seed).unwrap();

            prop_assert_eq!(result.height() as i64, out_h);
            prop_assert_eq!(result.width() as i64, out_w);
            prop_assert_eq!(result.channels(), 3);
        }

        /// Property: cropping is deterministic for a fixed seed.
        #[test]
        fn prop_crop_is_deterministic(
            (height, width) in dimensions_strategy(),
            seed in any::<u64>(),
        ) {
            let img = create_test_image(height, width);
            let out_h = (height as i64 + 1) / 2;
            let out_w = (width as i64 + 1) / 2;

            let a = random_crop(img.view(), out_h, out_w, seed).unwrap();
            let b = random_crop(img.view(), out_h, out_w, seed).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: the window lies inside the source and is copied verbatim.
        #[test]
        fn prop_window_inside_source(
            (height, width) in dimensions_strategy(),
            seed in any::<u64>(),
        ) {
            let img = create_test_image(height, width);
            let out_h = (height + 2) / 3;
            let out_w = (width + 2) / 3;
            let crop = random_crop(img.view(), out_h as i64, out_w as i64, seed).unwrap();

            let y0 = crop.pixels()[0] as usize;
            let x0 = crop.pixels()[1] as usize;
            prop_assert!(y0 + out_h <= height);
            prop_assert!(x0 + out_w <= width);
            for y in 0..out_h {
                for x in 0..out_w {
                    for c in 0..3 {
                        prop_assert_eq!(crop.get(y, x, c), img.get(y0 + y, x0 + x, c));
                    }
                }
            }
        }

        /// Property: a full-size crop returns the original image.
        #[test]
        fn prop_full_crop_returns_original(
            (height, width) in dimensions_strategy(),
            seed in any::<u64>(),
        ) {
            let img = create_test_image(height, width);
            let result = random_crop(img.view(), height as i64, width as i64, seed).unwrap();
            prop_assert_eq!(result, img);
        }
    }
}
