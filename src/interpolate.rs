//! Interpolation utilities
//!
//! Rasterization here is done by incremental stepping rather than by barycentric weights:
//! an edge is walked one whole pixel at a time, and every attribute carried by a vertex
//! advances by a constant per-pixel step. [`Interpolate`] describes the two operations that
//! walk needs.

use nalgebra::{Scalar, SVector};
use num_traits::AsPrimitive;

/// Describes a type that can be affinely interpolated by constant steps.
///
/// For any `x1`, `x2` and non-zero `span`, advancing `x1` by `span` units of
/// `Interpolate::step(x1, x2, span)` arrives at `x2` (up to rounding).
pub trait Interpolate: Sized {
    /// Change per unit along the walk when going from `x1` to `x2` over `span` units
    fn step(x1: &Self, x2: &Self, span: f64) -> Self;

    /// Advance the value in-place by `t` units of `step`
    fn advance(&mut self, step: &Self, t: f64);
}

macro_rules! impl_primitive_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn step(x1: &$t, x2: &$t, span: f64) -> $t {
                    let x1: f64 = AsPrimitive::<f64>::as_(*x1);
                    let x2: f64 = AsPrimitive::<f64>::as_(*x2);

                    ((x2 - x1) / span).as_()
                }

                #[inline(always)]
                fn advance(&mut self, step: &$t, t: f64) {
                    let value: f64 = AsPrimitive::<f64>::as_(*self);
                    let step: f64 = AsPrimitive::<f64>::as_(*step);

                    *self = (value + step * t).as_();
                }
            }
        )+
    }
}

impl_primitive_interpolate!(f32, f64);

// Vectors delegate to their components, like any other collection of interpolated values
impl<N, const D: usize> Interpolate for SVector<N, D> where N: Scalar + Interpolate {
    #[inline]
    fn step(x1: &Self, x2: &Self, span: f64) -> Self {
        x1.zip_map(x2, |a, b| N::step(&a, &b, span))
    }

    #[inline]
    fn advance(&mut self, step: &Self, t: f64) {
        self.zip_apply(step, |value, step| value.advance(&step, t));
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::Interpolate;

    #[test]
    fn test_scalar_step() {
        let step = f64::step(&1.0, &4.0, 3.0);
        assert_eq!(step, 1.0);

        let step32 = f32::step(&0.0, &1.0, 4.0);
        assert_eq!(step32, 0.25);

        let mut value = 1.0f64;
        value.advance(&step, 2.5);
        assert_eq!(value, 3.5);
    }

    #[test]
    fn test_vector_step_reaches_end() {
        let a = Vector4::new(0.0, 1.0, 0.0, 1.0);
        let b = Vector4::new(1.0, 0.0, 0.5, 1.0);

        let step = Interpolate::step(&a, &b, 4.0);

        let mut value = a;
        value.advance(&step, 4.0);

        assert_eq!(value, b);
    }
}
