//! Declarative augmentation steps.
//!
//! An [`Augmentation`] names one operation and its parameters so a training
//! config can describe a chain of transforms as data:
//!
//! ```json
//! [
//!   {"op": "random_crop", "out_h": 224, "out_w": 224, "seed": 7},
//!   {"op": "brightness", "delta": 12},
//!   {"op": "resize_pad", "out_h": 256, "out_w": 256, "pad": 114}
//! ]
//! ```
//!
//! Omitted seeds default to 0 and omitted resize options take the
//! [`ResizePadOptions`] defaults.

use serde::{Deserialize, Serialize};

use crate::adjustments::{brightness, contrast};
use crate::error::PixxError;
use crate::luminance::to_gray;
use crate::noise::add_noise;
use crate::transform::{random_crop, resize_pad, ResizePadOptions};
use crate::types::{Image, ImageView};
use crate::validate::validate;

/// One operation with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Augmentation {
    ToGray,
    Brightness {
        delta: i32,
    },
    Contrast {
        alpha: f32,
    },
    AddNoise {
        amp: i32,
        #[serde(default)]
        seed: u64,
    },
    RandomCrop {
        out_h: i64,
        out_w: i64,
        #[serde(default)]
        seed: u64,
    },
    ResizePad {
        out_h: i64,
        out_w: i64,
        #[serde(flatten)]
        options: ResizePadOptions,
    },
}

impl Augmentation {
    /// Run this step on an image.
    pub fn apply(&self, image: ImageView<'_>) -> Result<Image, PixxError> {
        match *self {
            Augmentation::ToGray => to_gray(image),
            Augmentation::Brightness { delta } => brightness(image, delta),
            Augmentation::Contrast { alpha } => contrast(image, alpha),
            Augmentation::AddNoise { amp, seed } => add_noise(image, amp, seed),
            Augmentation::RandomCrop { out_h, out_w, seed } => {
                random_crop(image, out_h, out_w, seed)
            }
            Augmentation::ResizePad {
                out_h,
                out_w,
                options,
            } => resize_pad(image, out_h, out_w, options),
        }
    }
}

/// Apply `steps` in order to a single image.
///
/// Stops at the first failing step and returns its error. With no steps the
/// input is validated and copied.
pub fn apply_all(image: ImageView<'_>, steps: &[Augmentation]) -> Result<Image, PixxError> {
    let Some((first, rest)) = steps.split_first() else {
        let shape = validate(image)?;
        return Ok(Image::from_parts(shape, image.data().to_vec()));
    };

    let mut current = first.apply(image)?;
    for step in rest {
        current = step.apply(current.view())?;
    }
    Ok(current)
}
