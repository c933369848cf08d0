use nalgebra::{Vector3, Vector4};

use crate::interpolate::Interpolate;

/// Axis along which an edge is walked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal, used to fill spans within a scanline
    X,
    /// Vertical, used to step edges from one scanline to the next
    Y,
}

/// Defines a vertex and its color in screen-space, which is what the rasterizer walks over.
///
/// Clip-space vertices are transformed to screen-space by [`ClipVertex::normalize`](super::ClipVertex::normalize).
/// Every field is interpolated affinely in screen-space; there is no perspective correction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenVertex {
    /// Screen-space pixel position in `x` and `y`, and the raw clip-space depth in `z`.
    pub position: Vector3<f64>,
    /// Linear RGBA color
    pub color: Vector4<f64>,
}

impl ScreenVertex {
    #[inline(always)]
    pub fn new(position: Vector3<f64>, color: Vector4<f64>) -> ScreenVertex {
        ScreenVertex { position, color }
    }

    /// Position component along the given axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.position.x,
            Axis::Y => self.position.y,
        }
    }

    /// Overwrite the position component along the given axis
    #[inline]
    pub fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.position.x = value,
            Axis::Y => self.position.y = value,
        }
    }
}

impl Interpolate for ScreenVertex {
    #[inline]
    fn step(x1: &Self, x2: &Self, span: f64) -> Self {
        ScreenVertex {
            position: Interpolate::step(&x1.position, &x2.position, span),
            color: Interpolate::step(&x1.color, &x2.color, span),
        }
    }

    #[inline]
    fn advance(&mut self, step: &Self, t: f64) {
        self.position.advance(&step.position, t);
        self.color.advance(&step.color, t);
    }
}
