use log::warn;

use crate::framebuffer::RenderBuffer;
use crate::geometry::ClipVertex;

use super::RasterArguments;

/// Plots a vertex straight into the framebuffer, using its `x` and `y` as pixel coordinates.
///
/// No transform, depth test or transfer function is involved beyond what `args` specifies for the color.
/// Coordinates are truncated toward zero. Returns whether the point landed inside the framebuffer.
pub fn rasterize_point(args: &RasterArguments, framebuffer: &mut RenderBuffer, point: &ClipVertex) -> bool {
    let (x, y) = (point.position.x, point.position.y);

    match args.dimensions.coordinate(x as i64, y as i64) {
        Some(coord) => {
            framebuffer.write(coord, args.color_encoding.encode(&point.color));
            true
        }
        None => {
            warn!("skipping point ({}, {}) outside of the framebuffer", x, y);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use crate::color::ColorEncoding;
    use crate::geometry::{Coordinate, Dimensions};

    use super::*;

    #[test]
    fn test_plots_truncated_coordinates() {
        let args = RasterArguments { dimensions: Dimensions::new(3, 3), color_encoding: ColorEncoding::Linear };
        let mut framebuffer = RenderBuffer::new(args.dimensions).unwrap();

        let point = ClipVertex::new(Vector4::new(2.9, 1.2, 0.0, 1.0), Vector4::new(0.0, 1.0, 0.0, 1.0));
        let outside = ClipVertex::new(Vector4::new(3.0, 0.0, 0.0, 1.0), Vector4::new(0.0, 1.0, 0.0, 1.0));

        assert!(rasterize_point(&args, &mut framebuffer, &point));
        assert!(!rasterize_point(&args, &mut framebuffer, &outside));

        assert_eq!(framebuffer.pixel(Coordinate::new(2, 1)), Ok(Vector4::new(0, 255, 0, 255)));
    }
}
