//! Nearest-neighbor resize onto a padded canvas.
//!
//! # Geometry
//!
//! With `keep_aspect`, the image is scaled by `s = min(out_h / H, out_w / W)`
//! and centered on the canvas (letterboxing); the remaining border keeps the
//! pad value. Without it, the image is stretched over the whole canvas.
//!
//! # Sampling
//!
//! Each destination coordinate `q` in a target extent `tq` maps back to a
//! source extent `pmax` through pixel centers:
//! ```text
//! src = (q + 0.5) * (pmax / tq) - 0.5
//! ```
//! rounded half away from zero and clamped to `[0, pmax - 1]`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::crop::positive;
use crate::error::{ArgumentError, PixxError, UnsupportedFeatureError};
use crate::types::{Image, ImageView, ImgShape};
use crate::validate::validate;

/// Options for [`resize_pad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizePadOptions {
    /// Preserve the aspect ratio and letterbox (default true).
    pub keep_aspect: bool,
    /// Fill value written to every channel of the uncovered canvas (default 0).
    pub pad: u8,
    /// Request bilinear resampling. Not implemented; always rejected.
    pub bilinear: bool,
}

impl Default for ResizePadOptions {
    fn default() -> Self {
        Self {
            keep_aspect: true,
            pad: 0,
            bilinear: false,
        }
    }
}

/// Placement of the resampled image on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    target_h: usize,
    target_w: usize,
    off_y: usize,
    off_x: usize,
}

/// Resize an image with nearest-neighbor sampling onto an `out_h x out_w` canvas.
///
/// # Returns
///
/// A new (out_h, out_w, C) image. When the canvas equals the input size and
/// `keep_aspect` is set, the output equals the input exactly.
///
/// # Errors
///
/// Checked in this order:
/// - [`UnsupportedFeatureError::BilinearNotImplemented`] if `options.bilinear`
/// - [`PixxError::Shape`] if the input is not a valid image
/// - [`ArgumentError::BadCanvasSize`] if either canvas size is not positive, or
///   the canvas element count does not fit in `usize`
#[instrument(level = "debug", skip(image), fields(dims = ?image.dims()))]
pub fn resize_pad(
    image: ImageView<'_>,
    out_h: i64,
    out_w: i64,
    options: ResizePadOptions,
) -> Result<Image, PixxError> {
    if options.bilinear {
        debug!("rejecting bilinear resampling");
        return Err(UnsupportedFeatureError::BilinearNotImplemented.into());
    }
    let shape = validate(image)?;

    let (canvas_h, canvas_w) = match (positive(out_h), positive(out_w)) {
        (Some(h), Some(w)) => (h, w),
        _ => {
            debug!("rejecting non-positive canvas size");
            return Err(ArgumentError::BadCanvasSize { out_h, out_w }.into());
        }
    };
    let area = canvas_h
        .checked_mul(canvas_w)
        .and_then(|n| n.checked_mul(shape.channels));
    if area.is_none() {
        debug!("rejecting canvas whose element count overflows");
        return Err(ArgumentError::BadCanvasSize { out_h, out_w }.into());
    }

    let out_shape = ImgShape {
        height: canvas_h,
        width: canvas_w,
        channels: shape.channels,
    };
    let mut output = Image::filled(out_shape, options.pad);

    let placement = if options.keep_aspect {
        letterbox(shape, canvas_h, canvas_w)
    } else {
        Placement {
            target_h: canvas_h,
            target_w: canvas_w,
            off_y: 0,
            off_x: 0,
        }
    };
    debug!(?placement, "resize placement");

    let src = image.data();
    let channels = shape.channels;
    // Column lookups are identical for every row.
    let src_cols: Vec<usize> = (0..placement.target_w)
        .map(|x| map_nearest(x, placement.target_w, shape.width))
        .collect();

    let dst = output.pixels_mut();
    for y in 0..placement.target_h {
        let sy = map_nearest(y, placement.target_h, shape.height);
        for (x, &sx) in src_cols.iter().enumerate() {
            let s = shape.index(sy, sx, 0);
            let d = out_shape.index(placement.off_y + y, placement.off_x + x, 0);
            dst[d..d + channels].copy_from_slice(&src[s..s + channels]);
        }
    }

    Ok(output)
}

/// Scale to fit inside the canvas and center the result.
fn letterbox(shape: ImgShape, canvas_h: usize, canvas_w: usize) -> Placement {
    let (h, w) = (shape.height as f64, shape.width as f64);
    let s = (canvas_h as f64 / h).min(canvas_w as f64 / w);

    let target_h = ((h * s).round() as usize).max(1);
    let target_w = ((w * s).round() as usize).max(1);

    Placement {
        target_h,
        target_w,
        off_y: (canvas_h - target_h) / 2,
        off_x: (canvas_w - target_w) / 2,
    }
}

/// Map destination index `q` of extent `tq` to a source index of extent `pmax`.
#[inline]
fn map_nearest(q: usize, tq: usize, pmax: usize) -> usize {
    let src_pos = (q as f64 + 0.5) * (pmax as f64 / tq as f64) - 0.5;
    // f64::round ties away from zero; negative positions clamp to 0.
    let p = src_pos.round();
    if p <= 0.0 {
        0
    } else {
        (p as usize).min(pmax - 1)
    }
}
