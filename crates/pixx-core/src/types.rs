//! Core image buffer types.
//!
//! Two representations exist:
//! - [`ImageView`]: a borrowed buffer plus its dimension list, exactly as a
//!   host binding layer hands it over. Nothing about it is trusted yet.
//! - [`Image`]: an owned, validated (H, W, C) buffer. Every operation returns
//!   one of these.

use image::{DynamicImage, GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::validate::validate;

/// Validated image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImgShape {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Channels per pixel (1 or 3).
    pub channels: usize,
}

impl ImgShape {
    /// Total number of `u8` elements in a buffer of this shape.
    #[inline]
    pub fn len(&self) -> usize {
        self.height * self.width * self.channels
    }

    /// True when any dimension is zero. Never true for a validated shape.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensions in (H, W, C) order.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [self.height, self.width, self.channels]
    }

    /// Flat index of element (y, x, c) in a row-major buffer.
    #[inline]
    pub(crate) fn index(&self, y: usize, x: usize, c: usize) -> usize {
        (y * self.width + x) * self.channels + c
    }
}

/// A borrowed, not yet validated n-dimensional `u8` buffer.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    dims: &'a [usize],
    data: &'a [u8],
}

impl<'a> ImageView<'a> {
    /// Wrap a dimension list and a row-major byte buffer.
    pub fn new(dims: &'a [usize], data: &'a [u8]) -> Self {
        Self { dims, data }
    }

    /// The dimension list as supplied.
    pub fn dims(&self) -> &'a [usize] {
        self.dims
    }

    /// The raw element buffer.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl<'a> From<&'a Image> for ImageView<'a> {
    fn from(image: &'a Image) -> Self {
        image.view()
    }
}

/// An owned, dense, row-major (H, W, C) image with 1 or 3 channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    dims: [usize; 3],
    pixels: Vec<u8>,
}

impl Image {
    /// Create an image from dimensions and pixel data, validating both.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, ShapeError> {
        let dims = [height, width, channels];
        validate(ImageView::new(&dims, &pixels))?;
        Ok(Self { dims, pixels })
    }

    /// Build from a shape and buffer the caller has already sized.
    pub(crate) fn from_parts(shape: ImgShape, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), shape.len(), "Pixel buffer size mismatch");
        Self {
            dims: shape.dims(),
            pixels,
        }
    }

    /// A canvas of the given shape with every element set to `value`.
    pub(crate) fn filled(shape: ImgShape, value: u8) -> Self {
        Self::from_parts(shape, vec![value; shape.len()])
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims[0]
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims[1]
    }

    /// Channels per pixel (1 or 3).
    pub fn channels(&self) -> usize {
        self.dims[2]
    }

    /// Dimensions as an [`ImgShape`].
    pub fn shape(&self) -> ImgShape {
        ImgShape {
            height: self.dims[0],
            width: self.dims[1],
            channels: self.dims[2],
        }
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Element at (y, x, c), or `None` when out of bounds.
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<u8> {
        let shape = self.shape();
        if y >= shape.height || x >= shape.width || c >= shape.channels {
            return None;
        }
        Some(self.pixels[shape.index(y, x, c)])
    }

    /// Borrow this image as an operation input.
    pub fn view(&self) -> ImageView<'_> {
        ImageView::new(&self.dims, &self.pixels)
    }

    /// Consume the image, returning its pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Create a 3-channel image from an image::RgbImage.
    ///
    /// Fails with [`ShapeError::BadExtent`] for an empty source image.
    pub fn from_rgb_image(img: RgbImage) -> Result<Self, ShapeError> {
        let (width, height) = img.dimensions();
        Self::new(height as usize, width as usize, 3, img.into_raw())
    }

    /// Create a 1-channel image from an image::GrayImage.
    pub fn from_gray_image(img: GrayImage) -> Result<Self, ShapeError> {
        let (width, height) = img.dimensions();
        Self::new(height as usize, width as usize, 1, img.into_raw())
    }

    /// Create an image from any decoded image.
    ///
    /// 8-bit luma stays single-channel; every other layout is converted to RGB.
    /// Alpha channels are dropped.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, ShapeError> {
        match img {
            DynamicImage::ImageLuma8(gray) => Self::from_gray_image(gray),
            other => Self::from_rgb_image(other.to_rgb8()),
        }
    }

    /// Convert to a DynamicImage for encoding or further processing.
    ///
    /// Returns `None` if a dimension does not fit the image crate's `u32` extents.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;
        match self.channels() {
            1 => GrayImage::from_raw(width, height, self.pixels.clone())
                .map(DynamicImage::ImageLuma8),
            _ => RgbImage::from_raw(width, height, self.pixels.clone())
                .map(DynamicImage::ImageRgb8),
        }
    }
}
