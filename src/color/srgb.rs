//! Linear to sRGB transfer function

/// Linear values at or below this use the linear segment of the curve
pub const SRGB_LINEAR_CUTOFF: f64 = 0.0031308;

/// Encode a linear channel value with the sRGB transfer function.
///
/// ```text
/// f(c) = 12.92 * c                      if c <= 0.0031308
/// f(c) = 1.055 * c^(1/2.4) - 0.055      otherwise
/// ```
///
/// The upper segment is evaluated as `1.055 * (c^(1/2.4) - 1) + 1`, which is the same curve
/// but lands exactly on `1.0` for `c = 1.0` instead of one ulp below it.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= SRGB_LINEAR_CUTOFF {
        12.92 * c
    } else {
        1.055 * (c.powf(1.0 / 2.4) - 1.0) + 1.0
    }
}
