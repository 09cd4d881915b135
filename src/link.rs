//! Fixed-length links between two points, relaxed iteratively.

use crate::float::Float;
use crate::point::Point;

/// Distance constraint between points `a` and `b` of the owning solver.
///
/// Holds indices, never the points themselves; the solver checks them when
/// the link is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
}

impl<F: Float> Link<F> {
    /// Link two points at their current separation.
    pub(crate) fn between(a: usize, b: usize, points: &[Point<F>]) -> Self {
        let rest_length = points[a].position.distance(points[b].position);
        Link { a, b, rest_length }
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Current separation of the endpoints.
    pub fn length(&self, points: &[Point<F>]) -> F {
        points[self.a].position.distance(points[self.b].position)
    }

    /// Absolute deviation from the rest length.
    pub fn error(&self, points: &[Point<F>]) -> F {
        (self.length(points) - self.rest_length).abs()
    }

    /// Apply one partial correction toward the rest length.
    ///
    /// The correction is `1 / stiffness_divisor` of what would split the
    /// error evenly, so many passes are needed to stiffen the body. Pinned
    /// endpoints do not move. Returns `false` if the endpoints coincide and
    /// the pass was skipped.
    pub fn relax(&self, points: &mut [Point<F>], stiffness_divisor: F) -> bool {
        let delta = points[self.a].position - points[self.b].position;
        let dist = delta.length();
        if dist == F::zero() {
            return false;
        }

        let diff = self.rest_length - dist;
        let fraction = (diff / dist) / stiffness_divisor;
        let offset = delta.scale(fraction);

        if !points[self.a].pinned {
            points[self.a].position += offset;
        }
        if !points[self.b].pinned {
            points[self.b].position -= offset;
        }
        true
    }
}
