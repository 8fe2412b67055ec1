//! Input shape validation shared by every operation.

use crate::error::ShapeError;
use crate::types::{ImageView, ImgShape};

/// Check that a buffer is a dense (H, W, C) image with C in {1, 3}.
///
/// Checks run in a fixed order: rank, then height/width, then channel count,
/// then buffer length.
pub fn validate(image: ImageView<'_>) -> Result<ImgShape, ShapeError> {
    let [height, width, channels] = match *image.dims() {
        [h, w, c] => [h, w, c],
        _ => return Err(ShapeError::RankMismatch(image.dims().len())),
    };
    if height == 0 || width == 0 {
        return Err(ShapeError::BadExtent { height, width });
    }
    if !(channels == 1 || channels == 3) {
        return Err(ShapeError::BadChannelCount(channels));
    }

    let expected = height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .unwrap_or(usize::MAX);
    let actual = image.data().len();
    if actual != expected {
        return Err(ShapeError::BufferLength { expected, actual });
    }

    Ok(ImgShape {
        height,
        width,
        channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rgb() {
        let data = [0u8; 2 * 3 * 3];
        let shape = validate(ImageView::new(&[2, 3, 3], &data)).unwrap();
        assert_eq!(
            shape,
            ImgShape {
                height: 2,
                width: 3,
                channels: 3
            }
        );
    }

    #[test]
    fn test_valid_gray() {
        let data = [0u8; 4];
        assert!(validate(ImageView::new(&[2, 2, 1], &data)).is_ok());
    }

    #[test]
    fn test_rank_mismatch() {
        let data = [0u8; 4];
        assert_eq!(
            validate(ImageView::new(&[2, 2], &data)),
            Err(ShapeError::RankMismatch(2))
        );
        assert_eq!(
            validate(ImageView::new(&[1, 2, 2, 1], &data)),
            Err(ShapeError::RankMismatch(4))
        );
        assert_eq!(
            validate(ImageView::new(&[], &data)),
            Err(ShapeError::RankMismatch(0))
        );
    }

    #[test]
    fn test_zero_extent() {
        assert_eq!(
            validate(ImageView::new(&[0, 5, 3], &[])),
            Err(ShapeError::BadExtent {
                height: 0,
                width: 5
            })
        );
        assert_eq!(
            validate(ImageView::new(&[5, 0, 1], &[])),
            Err(ShapeError::BadExtent {
                height: 5,
                width: 0
            })
        );
    }

    #[test]
    fn test_bad_channel_count() {
        for c in [0usize, 2, 4] {
            let data = vec![0u8; 4 * c];
            assert_eq!(
                validate(ImageView::new(&[2, 2, c], &data)),
                Err(ShapeError::BadChannelCount(c))
            );
        }
    }

    #[test]
    fn test_extent_checked_before_channels() {
        // Both H and C are wrong; the extent error wins.
        assert!(matches!(
            validate(ImageView::new(&[0, 2, 4], &[])),
            Err(ShapeError::BadExtent { .. })
        ));
    }

    #[test]
    fn test_buffer_length_mismatch() {
        let data = [0u8; 10];
        assert_eq!(
            validate(ImageView::new(&[2, 2, 3], &data)),
            Err(ShapeError::BufferLength {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn test_overflowing_dims_do_not_panic() {
        let data = [0u8; 3];
        let result = validate(ImageView::new(&[usize::MAX, 2, 3], &data));
        assert!(matches!(result, Err(ShapeError::BufferLength { .. })));
    }
}
