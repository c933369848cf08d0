//! Edge walking, the incremental stepping shared by all triangle rasterization

use crate::geometry::{Axis, ScreenVertex};
use crate::interpolate::Interpolate;

/// A point produced by an [`EdgeWalker`], at a whole pixel coordinate along the walked axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Integer coordinate along the walked axis, i.e. the scanline or the column
    pub index: i64,
    /// Interpolated vertex. Its position along the walked axis is exactly `index`.
    pub vertex: ScreenVertex,
}

/// Walks from one screen-space vertex to another along an axis, one whole pixel at a time.
///
/// The walk is direction independent: endpoints are ordered so the walk always goes from
/// the smaller to the larger coordinate along `axis`. The first sample lands on the first
/// integer coordinate at or past the start, and samples continue while the coordinate is
/// strictly less than the end. Every other field advances by a constant step per pixel.
///
/// An edge with no extent along the axis produces no samples.
#[derive(Debug, Clone)]
pub struct EdgeWalker {
    axis: Axis,
    start: ScreenVertex,
    from: f64,
    current: ScreenVertex,
    step: ScreenVertex,
    // Next coordinate to sample. Always a whole number, kept as a float so far off-screen
    // endpoints never have to fit in an integer.
    next: f64,
    end: f64,
    done: bool,
}

impl EdgeWalker {
    pub fn new(a: &ScreenVertex, b: &ScreenVertex, axis: Axis) -> EdgeWalker {
        let (start, end) = if a.along(axis) <= b.along(axis) { (a, b) } else { (b, a) };

        let from = start.along(axis);
        let to = end.along(axis);

        let span = to - from;

        // Also catches NaN and infinite endpoints, which would never terminate
        if !(span > 0.0) || !span.is_finite() {
            return EdgeWalker {
                axis,
                start: start.clone(),
                from,
                current: start.clone(),
                step: start.clone(),
                next: 0.0,
                end: to,
                done: true,
            };
        }

        let step = Interpolate::step(start, end, span);

        let next = from.ceil();

        let mut current = start.clone();
        current.advance(&step, next - from);

        EdgeWalker { axis, start: start.clone(), from, current, step, next, end: to, done: false }
    }

    /// Restricts the walk to coordinates within `min..max`.
    ///
    /// Samples before `min` are skipped over in a single step, and the walk stops before `max`.
    /// Samples inside the range are the same ones the unrestricted walk would produce.
    pub fn clip(mut self, min: i64, max: i64) -> EdgeWalker {
        let (min, max) = (min as f64, max as f64);

        if !self.done && self.next < min {
            let mut current = self.start.clone();
            current.advance(&self.step, min - self.from);

            self.current = current;
            self.next = min;
        }

        self.end = self.end.min(max);

        self
    }
}

impl Iterator for EdgeWalker {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.done {
            return None;
        }

        let coordinate = self.next;

        if !(coordinate < self.end) {
            self.done = true;
            return None;
        }

        let mut vertex = self.current.clone();
        vertex.set_along(self.axis, coordinate);

        self.current.advance(&self.step, 1.0);
        self.next += 1.0;

        Some(Sample { index: coordinate as i64, vertex })
    }
}
