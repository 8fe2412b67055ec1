//! Geometric transforms: random crop and resize-with-padding.
//!
//! Both produce a new image whose size is chosen by the caller, independent of
//! the input size.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `y` indexes rows (height), `x` indexes columns (width)
//! - Sizes are signed so that non-positive requests can be reported as errors

mod crop;
mod resize;

pub use crop::random_crop;
pub use resize::{resize_pad, ResizePadOptions};
