use std::cmp::Ordering;

use log::trace;

use crate::framebuffer::{DepthBuffer, RenderBuffer};
use crate::geometry::{Axis, ScreenVertex};

use crate::pipeline::stages::fragment::{write_fragment, Fragment};

use super::{EdgeWalker, RasterArguments, Sample};

/// Fills a screen-space triangle scanline by scanline.
///
/// Vertices are sorted by `y` into top, middle and bottom. The long edge from top to bottom
/// is walked once, then each short edge is walked and every scanline it produces is filled
/// horizontally up to the long edge sample of the same scanline.
///
/// Sorting is stable, so vertices sharing a `y` keep their input order.
pub fn rasterize_triangle(args: &RasterArguments,
                          framebuffer: &mut RenderBuffer,
                          mut depth: Option<&mut DepthBuffer>,
                          mut vertices: [ScreenVertex; 3]) {
    vertices.sort_by(|a, b| a.position.y.partial_cmp(&b.position.y).unwrap_or(Ordering::Equal));

    let [top, mid, bottom] = &vertices;

    let height = args.dimensions.height as i64;

    // Scanlines off the top or bottom of the framebuffer can never be written, so they are never walked.
    let long_edge: Vec<Sample> = EdgeWalker::new(top, bottom, Axis::Y).clip(0, height).collect();

    let first_row = match long_edge.first() {
        Some(sample) => sample.index,
        None => return,
    };

    let upper = EdgeWalker::new(top, mid, Axis::Y).clip(0, height);
    let lower = EdgeWalker::new(mid, bottom, Axis::Y).clip(0, height);

    for short in upper.chain(lower) {
        let long = usize::try_from(short.index - first_row).ok().and_then(|i| long_edge.get(i));

        match long {
            Some(long) => {
                debug_assert_eq!(long.index, short.index);

                fill_span(args, framebuffer, depth.as_deref_mut(), &short, long);
            }
            None => trace!("no long edge sample for scanline {}", short.index),
        }
    }
}

fn fill_span(args: &RasterArguments,
             framebuffer: &mut RenderBuffer,
             mut depth: Option<&mut DepthBuffer>,
             short: &Sample,
             long: &Sample) {
    let width = args.dimensions.width as i64;

    for sample in EdgeWalker::new(&short.vertex, &long.vertex, Axis::X).clip(0, width) {
        let fragment = Fragment {
            x: sample.index,
            y: short.index,
            depth: sample.vertex.position.z,
            color: sample.vertex.color,
        };

        write_fragment(args, framebuffer, depth.as_deref_mut(), &fragment);
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{Vector3, Vector4};

    use crate::color::ColorEncoding;
    use crate::geometry::{Coordinate, Dimensions};

    use super::*;

    fn args(width: u32, height: u32) -> RasterArguments {
        RasterArguments { dimensions: Dimensions::new(width, height), color_encoding: ColorEncoding::Linear }
    }

    fn vertex(x: f64, y: f64, z: f64) -> ScreenVertex {
        ScreenVertex::new(Vector3::new(x, y, z), Vector4::new(1.0, 1.0, 1.0, 1.0))
    }

    fn written(framebuffer: &RenderBuffer) -> Vec<(u32, u32)> {
        framebuffer.iter()
                   .filter(|&(_, color)| color != Vector4::zeros())
                   .map(|(Coordinate { x, y }, _)| (x, y))
                   .collect()
    }

    #[test]
    fn test_flat_top_triangle() {
        let args = args(4, 4);
        let mut framebuffer = RenderBuffer::new(args.dimensions).unwrap();

        rasterize_triangle(&args, &mut framebuffer, None, [vertex(0.0, 0.0, 0.0),
                                                           vertex(4.0, 0.0, 0.0),
                                                           vertex(2.0, 4.0, 0.0)]);

        assert_eq!(written(&framebuffer), vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (1, 1), (2, 1), (3, 1),
            (1, 2), (2, 2),
            (2, 3),
        ]);
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let args = args(8, 8);

        let a = vertex(1.0, 0.5, 0.0);
        let b = vertex(7.0, 3.0, 0.0);
        let c = vertex(2.0, 7.5, 0.0);

        let mut first = RenderBuffer::new(args.dimensions).unwrap();
        let mut second = RenderBuffer::new(args.dimensions).unwrap();

        rasterize_triangle(&args, &mut first, None, [a.clone(), b.clone(), c.clone()]);
        rasterize_triangle(&args, &mut second, None, [c, a, b]);

        assert_eq!(first, second);
        assert!(!written(&first).is_empty());
    }

    #[test]
    fn test_zero_height_triangle_writes_nothing() {
        let args = args(4, 4);
        let mut framebuffer = RenderBuffer::new(args.dimensions).unwrap();

        rasterize_triangle(&args, &mut framebuffer, None, [vertex(0.0, 2.0, 0.0),
                                                           vertex(1.0, 2.0, 0.0),
                                                           vertex(3.0, 2.0, 0.0)]);

        assert!(written(&framebuffer).is_empty());
    }

    #[test]
    fn test_offscreen_parts_are_clipped() {
        let args = args(4, 4);
        let mut framebuffer = RenderBuffer::new(args.dimensions).unwrap();

        rasterize_triangle(&args, &mut framebuffer, None, [vertex(-100.0, -100.0, 0.0),
                                                           vertex(100.0, -100.0, 0.0),
                                                           vertex(0.0, 100.0, 0.0)]);

        assert_eq!(written(&framebuffer).len(), 16);
    }

    #[test]
    fn test_depth_keeps_nearest() {
        let args = args(4, 4);
        let mut framebuffer = RenderBuffer::new(args.dimensions).unwrap();
        let mut depth = DepthBuffer::new(args.dimensions);

        let near = |x, y| ScreenVertex::new(Vector3::new(x, y, 0.25), Vector4::new(0.0, 0.0, 1.0, 1.0));
        let far = |x, y| ScreenVertex::new(Vector3::new(x, y, 0.75), Vector4::new(1.0, 0.0, 0.0, 1.0));

        rasterize_triangle(&args, &mut framebuffer, Some(&mut depth), [near(0.0, 0.0), near(8.0, 0.0), near(0.0, 8.0)]);
        rasterize_triangle(&args, &mut framebuffer, Some(&mut depth), [far(0.0, 0.0), far(8.0, 0.0), far(0.0, 8.0)]);

        assert_eq!(framebuffer.pixel(Coordinate::new(1, 1)), Ok(Vector4::new(0, 0, 255, 255)));
    }
}
