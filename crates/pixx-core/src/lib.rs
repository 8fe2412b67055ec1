//! Pixx Core - deterministic pixel transforms for image augmentation
//!
//! This crate provides the native backend for a data-augmentation layer:
//! grayscale conversion, brightness and contrast, seeded noise, seeded random
//! crop and nearest-neighbor resize with letterboxing. All operations work on
//! dense row-major 8-bit images of shape (H, W, C) with C in {1, 3}.
//!
//! # Contract
//!
//! - Inputs are never mutated; every call returns a freshly allocated [`Image`].
//! - Inputs are validated before any output is allocated; errors are typed
//!   ([`ShapeError`], [`ArgumentError`], [`UnsupportedFeatureError`]).
//! - Randomized operations take an explicit `u64` seed and build a generator
//!   local to the call, so identical arguments reproduce identical output.
//!
//! # Module Structure
//!
//! - `types` - [`Image`], [`ImageView`] and [`ImgShape`]
//! - `validate` / `saturate` - shape checks and 8-bit clamping
//! - `luminance` - [`to_gray`]
//! - `adjustments` - [`brightness`] and [`contrast`]
//! - `noise` - [`add_noise`]
//! - `transform` - [`random_crop`] and [`resize_pad`]
//! - `pipeline` - serde-described chains of the above

pub mod adjustments;
pub mod error;
pub mod luminance;
pub mod noise;
pub mod pipeline;
pub mod saturate;
pub mod transform;
pub mod types;
pub mod validate;

pub use adjustments::{brightness, contrast};
pub use error::{ArgumentError, PixxError, ShapeError, UnsupportedFeatureError};
pub use luminance::to_gray;
pub use noise::add_noise;
pub use pipeline::{apply_all, Augmentation};
pub use saturate::{saturate_f32, saturate_i32};
pub use transform::{random_crop, resize_pad, ResizePadOptions};
pub use types::{Image, ImageView, ImgShape};
pub use validate::validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_return_owned_images() {
        let img = Image::new(4, 4, 3, vec![100; 48]).unwrap();
        let view = img.view();

        let results = [
            to_gray(view).unwrap(),
            brightness(view, 10).unwrap(),
            contrast(view, 2.0).unwrap(),
            add_noise(view, 5, 0).unwrap(),
            random_crop(view, 2, 2, 0).unwrap(),
            resize_pad(view, 6, 6, ResizePadOptions::default()).unwrap(),
        ];
        for out in &results {
            assert!(out.height() > 0 && out.width() > 0);
            assert_eq!(out.pixels().len(), out.shape().len());
        }
        // Input untouched.
        assert!(img.pixels().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_raw_buffer_entry_point() {
        // A host hands over dims and bytes separately.
        let dims = [2usize, 2, 3];
        let data = [10u8, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        let gray = to_gray(ImageView::new(&dims, &data)).unwrap();
        assert_eq!(gray.shape().dims(), [2, 2, 1]);
        assert_eq!(gray.into_raw(), vec![18, 48, 78, 108]);
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Image>();
        assert_send_sync::<ImageView<'static>>();
        assert_send_sync::<PixxError>();
        assert_send_sync::<Augmentation>();
    }
}
