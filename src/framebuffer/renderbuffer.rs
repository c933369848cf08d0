//! RGBA 8-bit framebuffer

use std::slice;

use crate::color::RGBAu8Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{Coordinate, Dimensions, HasDimensions};

/// Output pixel grid of RGBA 8-bit colors, stored in row-major order.
///
/// Row zero holds the pixels with the smallest screen-space `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    dimensions: Dimensions,
    pub(crate) buffer: Vec<RGBAu8Color>,
}

impl RenderBuffer {
    /// Create a new framebuffer of the given dimensions, with every pixel transparent black.
    ///
    /// Fails with `RenderError::InvalidDimensions` if either dimension is zero.
    pub fn new(dimensions: Dimensions) -> RenderResult<RenderBuffer> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(RenderError::InvalidDimensions(dimensions));
        }

        Ok(RenderBuffer {
            dimensions,
            buffer: vec![RGBAu8Color::zeros(); dimensions.area()],
        })
    }

    /// Get the pixel at the given coordinate.
    ///
    /// Throws `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    pub fn pixel(&self, coord: Coordinate) -> RenderResult<RGBAu8Color> {
        if self.in_bounds(coord) {
            Ok(self.buffer[coord.into_index(self.dimensions)])
        } else {
            Err(RenderError::InvalidPixelCoordinate(coord))
        }
    }

    /// Set the pixel at the given coordinate.
    ///
    /// Throws `RenderError::InvalidPixelCoordinate` on invalid pixel coordinates.
    pub fn set_pixel(&mut self, coord: Coordinate, color: RGBAu8Color) -> RenderResult<()> {
        if self.in_bounds(coord) {
            self.write(coord, color);
            Ok(())
        } else {
            Err(RenderError::InvalidPixelCoordinate(coord))
        }
    }

    // Callers have already bounds-checked the coordinate
    #[inline]
    pub(crate) fn write(&mut self, coord: Coordinate, color: RGBAu8Color) {
        let index = coord.into_index(self.dimensions);

        self.buffer[index] = color;
    }

    /// Iterate over every pixel together with its coordinate, row by row
    pub fn iter(&self) -> RenderBufferIter {
        RenderBufferIter {
            width: self.dimensions.width,
            index: 0,
            iter: self.buffer.iter(),
        }
    }

    /// Copy out the pixels as tightly packed RGBA bytes, row by row
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.buffer.len() * 4);

        for color in &self.buffer {
            res.extend_from_slice(color.as_slice());
        }

        res
    }
}

impl HasDimensions for RenderBuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}

/// Iterator over the pixels of a `RenderBuffer` and their coordinates
pub struct RenderBufferIter<'a> {
    width: u32,
    index: usize,
    iter: slice::Iter<'a, RGBAu8Color>,
}

impl<'a> Iterator for RenderBufferIter<'a> {
    type Item = (Coordinate, RGBAu8Color);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let color = *self.iter.next()?;

        let width = self.width as usize;
        let coord = Coordinate::new((self.index % width) as u32, (self.index / width) as u32);

        self.index += 1;

        Some((coord, color))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> ExactSizeIterator for RenderBufferIter<'a> {}
