use log::debug;

use crate::color::ColorEncoding;
use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{DepthBuffer, RenderBuffer};
use crate::geometry::{Dimensions, HasDimensions};

pub mod storage;
pub mod stages;

pub use self::storage::AttributeStore;
pub use self::stages::DrawRange;

use self::stages::fetch_triangle;
use self::stages::rasterization::{rasterize_point, rasterize_triangle, RasterArguments};

/// Rendering modes that persist between draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderState {
    /// Depth test indexed draws. Array draws take the flag per call,
    /// and scenes pass this one along.
    pub depth_test: bool,
    /// Transfer function applied to triangle fragments before they are written
    pub color_encoding: ColorEncoding,
}

/// Rendering context.
///
/// Holds the framebuffer, the bound vertex attributes and the render state,
/// and every draw call operates on exactly this state.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    framebuffer: Option<RenderBuffer>,
    attributes: AttributeStore,
    state: RenderState,
}

impl Pipeline {
    /// Create a new rendering context with no framebuffer and nothing bound
    pub fn new() -> Pipeline {
        Pipeline::default()
    }

    /// Create a new rendering context that draws into the given framebuffer
    pub fn with_framebuffer(framebuffer: RenderBuffer) -> Pipeline {
        Pipeline { framebuffer: Some(framebuffer), ..Pipeline::default() }
    }

    /// Create a fresh, transparent framebuffer for subsequent draws, replacing any previous one.
    ///
    /// Bound attributes and render state are kept.
    pub fn create_framebuffer(&mut self, width: u32, height: u32) -> RenderResult<&mut RenderBuffer> {
        let framebuffer = RenderBuffer::new(Dimensions::new(width, height))?;

        Ok(self.framebuffer.insert(framebuffer))
    }

    /// Returns a reference to the framebuffer, if one has been created
    #[inline]
    pub fn framebuffer(&self) -> Option<&RenderBuffer> { self.framebuffer.as_ref() }

    /// Returns a reference to the bound vertex attributes
    #[inline]
    pub fn attributes(&self) -> &AttributeStore { &self.attributes }

    /// Returns a mutable reference to the bound vertex attributes, for rebinding
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut AttributeStore { &mut self.attributes }

    /// Returns a reference to the render state
    #[inline]
    pub fn state(&self) -> &RenderState { &self.state }

    /// Returns a mutable reference to the render state
    #[inline]
    pub fn state_mut(&mut self) -> &mut RenderState { &mut self.state }

    /// Draws `count / 3` triangles from consecutive vertices starting at `first`.
    ///
    /// With `depth_test` enabled, a fresh depth buffer is used for this call alone,
    /// so triangles are only depth tested against others from the same call.
    ///
    /// Throws `RenderError::InvalidDrawCount` without drawing anything if `count` is not a multiple of 3.
    /// Any other error stops the draw, but leaves already rasterized triangles in place.
    pub fn draw_arrays_triangles(&mut self, first: usize, count: usize, depth_test: bool) -> RenderResult<()> {
        self.draw_triangles(DrawRange::Arrays { first, count }, depth_test)
    }

    /// Draws `count / 3` triangles whose vertices are named by the element array, starting at `offset`.
    ///
    /// Depth testing follows `RenderState::depth_test`, with the same per-call depth buffer as
    /// [`draw_arrays_triangles`](Pipeline::draw_arrays_triangles).
    pub fn draw_elements_triangles(&mut self, count: usize, offset: usize) -> RenderResult<()> {
        let depth_test = self.state.depth_test;

        self.draw_triangles(DrawRange::Elements { count, offset }, depth_test)
    }

    fn draw_triangles(&mut self, range: DrawRange, depth_test: bool) -> RenderResult<()> {
        if range.count() % 3 != 0 {
            return Err(RenderError::InvalidDrawCount(range.count()));
        }

        let Pipeline { framebuffer, attributes, state } = self;

        let framebuffer = framebuffer.as_mut().ok_or(RenderError::NoFramebuffer)?;

        let dimensions = framebuffer.dimensions();

        let args = RasterArguments { dimensions, color_encoding: state.color_encoding };

        let mut depth = if depth_test { Some(DepthBuffer::new(dimensions)) } else { None };

        debug!("drawing {} triangles from {:?} (depth test: {}, encoding: {:?})",
               range.count() / 3, range, depth_test, args.color_encoding);

        for triangle in 0..range.count() / 3 {
            let vertices = fetch_triangle(attributes, &range, triangle, dimensions.viewport())?;

            rasterize_triangle(&args, framebuffer, depth.as_mut(), vertices);
        }

        Ok(())
    }

    /// Plots the first `count` bound vertices directly into the framebuffer,
    /// using their clip-space `x` and `y` as pixel coordinates.
    ///
    /// Colors are written without the sRGB transfer function. Points outside of the framebuffer are skipped.
    /// Returns the number of points written.
    pub fn draw_pixels(&mut self, count: usize) -> RenderResult<usize> {
        let Pipeline { framebuffer, attributes, .. } = self;

        let framebuffer = framebuffer.as_mut().ok_or(RenderError::NoFramebuffer)?;

        let args = RasterArguments { dimensions: framebuffer.dimensions(), color_encoding: ColorEncoding::Linear };

        let count = count.min(attributes.positions().len()).min(attributes.colors().len());

        let mut written = 0;

        for index in 0..count {
            if rasterize_point(&args, framebuffer, &attributes.vertex(index)?) {
                written += 1;
            }
        }

        debug!("plotted {} of {} points", written, count);

        Ok(written)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use crate::geometry::Coordinate;

    use super::*;

    fn pipeline() -> Pipeline {
        let mut pipeline = Pipeline::new();

        pipeline.create_framebuffer(4, 4).unwrap();

        pipeline.attributes_mut().bind_positions(vec![
            Vector4::new(-1.0, -1.0, 0.0, 1.0),
            Vector4::new(1.0, -1.0, 0.0, 1.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
        ]);
        pipeline.attributes_mut().bind_colors(vec![Vector4::new(1.0, 0.0, 0.0, 1.0); 3]);

        pipeline
    }

    #[test]
    fn test_invalid_count_draws_nothing() {
        let mut pipeline = pipeline();

        assert_eq!(pipeline.draw_arrays_triangles(0, 2, false), Err(RenderError::InvalidDrawCount(2)));
        assert_eq!(pipeline.draw_elements_triangles(4, 0), Err(RenderError::InvalidDrawCount(4)));

        assert!(pipeline.framebuffer().unwrap().iter().all(|(_, color)| color == Vector4::zeros()));
    }

    #[test]
    fn test_draw_requires_framebuffer() {
        let mut pipeline = Pipeline::new();

        assert_eq!(pipeline.draw_arrays_triangles(0, 3, false), Err(RenderError::NoFramebuffer));
        assert_eq!(pipeline.draw_pixels(1), Err(RenderError::NoFramebuffer));
    }

    #[test]
    fn test_zero_count_is_a_no_op() {
        let mut pipeline = pipeline();

        assert_eq!(pipeline.draw_arrays_triangles(0, 0, true), Ok(()));
    }

    #[test]
    fn test_create_framebuffer_keeps_bindings() {
        let mut pipeline = pipeline();

        pipeline.draw_arrays_triangles(0, 3, false).unwrap();
        pipeline.create_framebuffer(2, 2).unwrap();

        assert_eq!(pipeline.attributes().positions().len(), 3);
        assert_eq!(pipeline.framebuffer().unwrap().pixel(Coordinate::new(0, 0)), Ok(Vector4::zeros()));
    }

    #[test]
    fn test_with_framebuffer() {
        let framebuffer = RenderBuffer::new(Dimensions::new(4, 4)).unwrap();

        let mut pipeline = Pipeline::with_framebuffer(framebuffer.clone());
        assert_eq!(pipeline.framebuffer(), Some(&framebuffer));

        pipeline.attributes_mut().bind_positions(vec![Vector4::new(3.0, 3.0, 0.0, 1.0)]);
        pipeline.attributes_mut().bind_colors(vec![Vector4::new(1.0, 1.0, 1.0, 1.0)]);

        assert_eq!(pipeline.draw_pixels(1), Ok(1));
        assert_eq!(pipeline.framebuffer().unwrap().pixel(Coordinate::new(3, 3)), Ok(Vector4::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_draw_pixels_ignores_srgb() {
        let mut pipeline = pipeline();

        pipeline.state_mut().color_encoding = ColorEncoding::Srgb;
        pipeline.attributes_mut().bind_positions(vec![Vector4::new(1.0, 2.0, 0.0, 1.0), Vector4::new(9.0, 0.0, 0.0, 1.0)]);
        pipeline.attributes_mut().bind_colors(vec![Vector4::new(0.5, 0.5, 0.5, 1.0); 2]);

        assert_eq!(pipeline.draw_pixels(5), Ok(1));
        assert_eq!(pipeline.framebuffer().unwrap().pixel(Coordinate::new(1, 2)), Ok(Vector4::new(127, 127, 127, 255)));
    }
}
