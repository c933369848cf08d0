//! Defines the color formats used by the pipeline.

pub mod formats {
    use nalgebra::Vector4;

    /// RGBA 64-bit Floating Point Color, as bound in vertex attributes and interpolated
    pub type RGBAf64Color = Vector4<f64>;

    /// RGBA 8-bit Unsigned Integer Color, as stored in the framebuffer
    pub type RGBAu8Color = Vector4<u8>;
}
