//! Vertex fetch and the clip-to-screen transform

use crate::error::{RenderError, RenderResult};
use crate::geometry::ScreenVertex;
use crate::pipeline::storage::AttributeStore;

/// Describes which bound vertices make up the triangles of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRange {
    /// `count` consecutive vertices starting at `first`
    Arrays { first: usize, count: usize },
    /// `count` vertices named by the element array, starting at `offset`
    Elements { count: usize, offset: usize },
}

impl DrawRange {
    /// Number of vertices drawn
    #[inline]
    pub fn count(&self) -> usize {
        match *self {
            DrawRange::Arrays { count, .. } | DrawRange::Elements { count, .. } => count,
        }
    }

    /// Resolves the `n`th vertex of the draw to an index into the bound attribute arrays
    pub fn vertex_index(&self, attributes: &AttributeStore, n: usize) -> RenderResult<usize> {
        match *self {
            DrawRange::Arrays { first, .. } => {
                first.checked_add(n).ok_or(RenderError::IndexOutOfRange { index: first, len: attributes.positions().len() })
            }
            DrawRange::Elements { offset, .. } => {
                let position = offset.checked_add(n).ok_or(RenderError::IndexOutOfRange { index: offset, len: attributes.elements().len() })?;

                attributes.element(position)
            }
        }
    }
}

/// Fetches the vertices of the given triangle of a draw, and transforms them into screen-space.
///
/// Throws `RenderError::IndexOutOfRange` for vertices that are not bound,
/// and `RenderError::DivideByZero` for vertices with `w = 0`.
pub fn fetch_triangle(attributes: &AttributeStore,
                      range: &DrawRange,
                      triangle: usize,
                      viewport: (f64, f64)) -> RenderResult<[ScreenVertex; 3]> {
    let fetch = |corner: usize| -> RenderResult<ScreenVertex> {
        let index = range.vertex_index(attributes, triangle * 3 + corner)?;

        attributes.vertex(index)?
                  .normalize(viewport)
                  .ok_or(RenderError::DivideByZero { vertex: index })
    };

    Ok([fetch(0)?, fetch(1)?, fetch(2)?])
}
