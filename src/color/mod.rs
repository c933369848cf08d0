//! Color encoding from interpolated linear colors to framebuffer pixels

use nalgebra::Vector4;

pub mod srgb;
pub mod predefined;

pub use self::predefined::formats::{RGBAf64Color, RGBAu8Color};
pub use self::srgb::linear_to_srgb;

/// Transfer function applied to the color channels of a fragment before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorEncoding {
    /// Channels are written as-is
    #[default]
    Linear,
    /// Red, green and blue are encoded with the sRGB transfer function, alpha stays linear
    Srgb,
}

impl ColorEncoding {
    /// Encode a single color channel into its transfer space, not yet scaled to 8 bits
    #[inline]
    pub fn encode_channel(self, value: f64) -> f64 {
        match self {
            ColorEncoding::Linear => value,
            ColorEncoding::Srgb => linear_to_srgb(value),
        }
    }

    /// Encode a linear RGBA color into an 8-bit pixel.
    ///
    /// Every channel is scaled by 255 and truncated, without clamping.
    /// Values outside of `[0, 1]` wrap around instead of saturating.
    pub fn encode(self, color: &RGBAf64Color) -> RGBAu8Color {
        Vector4::new(to_u8(self.encode_channel(color.x)),
                     to_u8(self.encode_channel(color.y)),
                     to_u8(self.encode_channel(color.z)),
                     to_u8(color.w))
    }
}

#[inline(always)]
fn to_u8(value: f64) -> u8 {
    (value * 255.0) as i64 as u8
}
