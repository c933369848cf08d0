//! Vertex attribute storage

use crate::color::RGBAf64Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::ClipVertex;

use nalgebra::Vector4;

/// Holds the currently bound position, color and element arrays.
///
/// Binding an array replaces the previous one entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    positions: Vec<Vector4<f64>>,
    colors: Vec<RGBAf64Color>,
    elements: Vec<usize>,
}

impl AttributeStore {
    pub fn new() -> AttributeStore {
        AttributeStore::default()
    }

    /// Replace the bound clip-space positions
    #[inline]
    pub fn bind_positions(&mut self, positions: Vec<Vector4<f64>>) {
        self.positions = positions;
    }

    /// Replace the bound linear vertex colors
    #[inline]
    pub fn bind_colors(&mut self, colors: Vec<RGBAf64Color>) {
        self.colors = colors;
    }

    /// Replace the bound element (index) array used by indexed draws
    #[inline]
    pub fn bind_elements(&mut self, elements: Vec<usize>) {
        self.elements = elements;
    }

    #[inline]
    pub fn positions(&self) -> &[Vector4<f64>] { &self.positions }

    #[inline]
    pub fn colors(&self) -> &[RGBAf64Color] { &self.colors }

    #[inline]
    pub fn elements(&self) -> &[usize] { &self.elements }

    /// Pairs up the position and color at the given vertex index.
    ///
    /// Throws `RenderError::IndexOutOfRange` if either array is too short.
    pub fn vertex(&self, index: usize) -> RenderResult<ClipVertex> {
        match (self.positions.get(index), self.colors.get(index)) {
            (Some(position), Some(color)) => Ok(ClipVertex::new(*position, *color)),
            _ => Err(RenderError::IndexOutOfRange {
                index,
                len: self.positions.len().min(self.colors.len()),
            }),
        }
    }

    /// Looks up the vertex index stored at the given position of the element array.
    ///
    /// Throws `RenderError::IndexOutOfRange` if the element array is too short.
    pub fn element(&self, offset: usize) -> RenderResult<usize> {
        self.elements.get(offset).cloned().ok_or(RenderError::IndexOutOfRange {
            index: offset,
            len: self.elements.len(),
        })
    }
}
