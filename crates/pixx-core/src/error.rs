//! Error types for pixel transform operations.
//!
//! Every operation validates its inputs before allocating output, so an error
//! always means no image was produced.

use thiserror::Error;

/// The input buffer does not describe a valid (H, W, C) image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The buffer is not exactly 3-dimensional.
    #[error("input must be 3-D array (H x W x C), got {0} dimension(s)")]
    RankMismatch(usize),

    /// Height or width is zero.
    #[error("H and W must be > 0, got {height}x{width}")]
    BadExtent { height: usize, width: usize },

    /// Channel count is neither 1 nor 3.
    #[error("channel dimension C must be 1 or 3, got {0}")]
    BadChannelCount(usize),

    /// The byte buffer does not hold exactly H * W * C elements.
    #[error("pixel buffer holds {actual} bytes, shape requires {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// An operation-specific argument is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Noise amplitude below zero.
    #[error("amp must be >= 0, got {0}")]
    NegativeAmplitude(i32),

    /// Crop height or width is not positive.
    #[error("out_h and out_w must be > 0, got {out_h}x{out_w}")]
    BadCropSize { out_h: i64, out_w: i64 },

    /// Crop window is larger than the source image.
    #[error("crop size {out_h}x{out_w} must be <= input size {height}x{width}")]
    CropExceedsImage {
        out_h: usize,
        out_w: usize,
        height: usize,
        width: usize,
    },

    /// Resize canvas height or width is not positive.
    #[error("out_h and out_w must be > 0, got {out_h}x{out_w}")]
    BadCanvasSize { out_h: i64, out_w: i64 },
}

/// A requested feature exists in the interface but is not implemented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedFeatureError {
    #[error("bilinear=true is not implemented yet")]
    BilinearNotImplemented,
}

/// Any error raised by a pixx operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixxError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedFeatureError),
}
