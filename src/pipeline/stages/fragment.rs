//! Fragment output: depth testing, color encoding and the final framebuffer write

use crate::color::RGBAf64Color;
use crate::framebuffer::{DepthBuffer, RenderBuffer};

use super::rasterization::RasterArguments;

/// A single rasterized sample, positioned on a whole pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub x: i64,
    pub y: i64,
    /// Raw interpolated clip-space depth
    pub depth: f64,
    /// Interpolated linear color
    pub color: RGBAf64Color,
}

/// Writes the fragment to the framebuffer if it is on-screen and passes the depth test.
///
/// When a depth buffer is given, the fragment's depth is committed along with the color.
/// There is no blending, so a written fragment replaces the previous pixel regardless of alpha.
///
/// Returns whether the fragment was written.
pub fn write_fragment(args: &RasterArguments,
                      framebuffer: &mut RenderBuffer,
                      depth: Option<&mut DepthBuffer>,
                      fragment: &Fragment) -> bool {
    let coord = match args.dimensions.coordinate(fragment.x, fragment.y) {
        Some(coord) => coord,
        None => return false,
    };

    if let Some(depth) = depth {
        if !depth.test(coord, fragment.depth) {
            return false;
        }

        depth.commit(coord, fragment.depth);
    }

    framebuffer.write(coord, args.color_encoding.encode(&fragment.color));

    true
}
