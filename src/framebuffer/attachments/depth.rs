//! Depth Buffer attachment

use crate::geometry::{Coordinate, Dimensions, HasDimensions};

/// Per-pixel nearest-depth tracker.
///
/// A depth buffer only lives for a single depth-tested draw call. Depth values are raw clip-space `z`,
/// and smaller values are nearer.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    dimensions: Dimensions,
    buffer: Vec<f64>,
}

impl DepthBuffer {
    /// Create a depth buffer with every pixel at the farthest possible depth
    pub fn new(dimensions: Dimensions) -> DepthBuffer {
        DepthBuffer {
            dimensions,
            buffer: vec![DepthBuffer::far(); dimensions.area()],
        }
    }

    /// The value that represents the farthest away depth value.
    #[inline(always)]
    pub fn far() -> f64 { f64::INFINITY }

    /// Returns true if a fragment at depth `z` is strictly nearer than what is stored at `coord`.
    ///
    /// Equal depths fail, so the first fragment written at a given depth stays.
    #[inline]
    pub fn test(&self, coord: Coordinate, z: f64) -> bool {
        debug_assert!(self.dimensions.in_bounds(coord));

        z < self.buffer[coord.into_index(self.dimensions)]
    }

    /// Store `z` as the depth of the pixel at `coord`
    #[inline]
    pub fn commit(&mut self, coord: Coordinate, z: f64) {
        debug_assert!(self.dimensions.in_bounds(coord));

        let index = coord.into_index(self.dimensions);

        self.buffer[index] = z;
    }

    /// Depth stored at the given coordinate, if it is in bounds
    pub fn depth(&self, coord: Coordinate) -> Option<f64> {
        if self.dimensions.in_bounds(coord) {
            Some(self.buffer[coord.into_index(self.dimensions)])
        } else {
            None
        }
    }
}

impl HasDimensions for DepthBuffer {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
