use nalgebra::{Vector3, Vector4};

use super::ScreenVertex;

/// Defines a vertex and its color in clip-space, as bound to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipVertex {
    /// Homogeneous clip-space vertex position.
    pub position: Vector4<f64>,
    /// Linear RGBA color, nominally within `[0, 1]` but never clamped.
    pub color: Vector4<f64>,
}

impl ClipVertex {
    /// Creates a new `ClipVertex` from the given clip-space position and color
    #[inline(always)]
    pub fn new(position: Vector4<f64>, color: Vector4<f64>) -> ClipVertex {
        ClipVertex { position, color }
    }

    /// Normalizes the clip-space vertex coordinates to screen-space using the given viewport.
    ///
    /// This assumes a viewport in the shape of:
    ///
    /// ```text
    /// 0,0-----------------x
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  y-----------------x,y
    /// ```
    ///
    /// where clip-space `y = -1` maps to row zero, so the y-axis is *not* flipped.
    ///
    /// Depth is carried through as the raw clip-space `z`, without the perspective divide,
    /// so depth comparisons are only consistent between vertices sharing the same `w`.
    ///
    /// Returns `None` if `w` is zero.
    pub fn normalize(&self, viewport: (f64, f64)) -> Option<ScreenVertex> {
        let (width, height) = viewport;

        let (x, y, z, w) = (self.position.x, self.position.y, self.position.z, self.position.w);

        if w == 0.0 {
            return None;
        }

        Some(ScreenVertex {
            position: Vector3::new(
                (x / w + 1.0) * width / 2.0,
                (y / w + 1.0) * height / 2.0,
                z,
            ),
            color: self.color,
        })
    }
}
