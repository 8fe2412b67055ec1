//! Saturating conversion into the 8-bit range.
//!
//! Both helpers clamp and truncate. Neither rounds: transforms that compute
//! fractional values round explicitly before calling [`saturate_i32`].

/// Clamp an integer into [0, 255].
#[inline]
pub fn saturate_i32(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Clamp a float into [0, 255] and truncate toward zero.
///
/// NaN maps to 0.
#[inline]
pub fn saturate_f32(v: f32) -> u8 {
    // `as u8` on a float saturates and sends NaN to 0.
    v.clamp(0.0, 255.0) as u8
}
