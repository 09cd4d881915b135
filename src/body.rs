//! Body presets and rest-pose reset.
//!
//! A `BodyBuilder` describes vertices and links in local indices; `build`
//! adds them to a solver and returns a `Body` that remembers its handles and
//! the pose to return to on reset.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{LinkId, PointId};
use crate::solver::Solver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Interior links for `BodyBuilder::hexagon`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HexBracing {
    /// Rim only. Folds freely.
    Rim,
    /// Rim plus the triangle joining every other vertex.
    Triangle,
    /// Rim plus every interior diagonal.
    Full,
}

/// Diagonals for `BodyBuilder::braced_box`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Diagonals {
    None,
    One,
    Both,
}

/// Vertices and links in local indices, not yet owned by a solver.
#[derive(Clone, Debug, Default)]
pub struct BodyBuilder<F: Float> {
    vertices: AllocVec<Vec2<F>>,
    pinned: AllocVec<bool>,
    links: AllocVec<(usize, usize)>,
}

impl<F: Float> BodyBuilder<F> {
    pub fn new() -> Self {
        BodyBuilder {
            vertices: AllocVec::new(),
            pinned: AllocVec::new(),
            links: AllocVec::new(),
        }
    }

    /// Free vertices with no links.
    pub fn from_points(vertices: &[Vec2<F>]) -> Self {
        let mut builder = Self::new();
        for &v in vertices {
            builder = builder.vertex(v);
        }
        builder
    }

    /// Pointy-top regular hexagon. Vertex 0 is at the top, then clockwise
    /// on screen (y down).
    pub fn hexagon(center: Vec2<F>, radius: F, bracing: HexBracing) -> Self {
        let s = F::from_f32(0.866_025_4) * radius;
        let h = F::half() * radius;
        let offsets = [
            Vec2::new(F::zero(), -radius),
            Vec2::new(s, -h),
            Vec2::new(s, h),
            Vec2::new(F::zero(), radius),
            Vec2::new(-s, h),
            Vec2::new(-s, -h),
        ];
        let mut builder = Self::new();
        for o in offsets {
            builder = builder.vertex(center + o);
        }
        for i in 0..6 {
            builder = builder.link(i, (i + 1) % 6);
        }
        match bracing {
            HexBracing::Rim => {}
            HexBracing::Triangle => {
                builder = builder.link(1, 3).link(1, 5).link(3, 5);
            }
            HexBracing::Full => {
                for i in 0..6 {
                    for j in (i + 2)..6 {
                        if !(i == 0 && j == 5) {
                            builder = builder.link(i, j);
                        }
                    }
                }
            }
        }
        builder
    }

    /// Axis-aligned box with its top-left corner at `origin`. Vertices go
    /// clockwise on screen starting top-left.
    pub fn braced_box(origin: Vec2<F>, width: F, height: F, diagonals: Diagonals) -> Self {
        let builder = Self::new()
            .vertex(origin)
            .vertex(origin + Vec2::new(width, F::zero()))
            .vertex(origin + Vec2::new(width, height))
            .vertex(origin + Vec2::new(F::zero(), height))
            .link(0, 1)
            .link(1, 2)
            .link(2, 3)
            .link(3, 0);
        match diagonals {
            Diagonals::None => builder,
            Diagonals::One => builder.link(0, 2),
            Diagonals::Both => builder.link(0, 2).link(1, 3),
        }
    }

    pub fn vertex(mut self, position: Vec2<F>) -> Self {
        self.vertices.push(position);
        self.pinned.push(false);
        self
    }

    pub fn pinned_vertex(mut self, position: Vec2<F>) -> Self {
        self.vertices.push(position);
        self.pinned.push(true);
        self
    }

    /// Link local vertices `a` and `b`. Checked in `build`.
    pub fn link(mut self, a: usize, b: usize) -> Self {
        self.links.push((a, b));
        self
    }

    /// Mark local vertex `index` as pinned. Out-of-range indices are ignored.
    pub fn pin(mut self, index: usize) -> Self {
        if let Some(flag) = self.pinned.get_mut(index) {
            *flag = true;
        }
        self
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Add the body to `solver`.
    ///
    /// Every link is checked before anything is added, so an invalid
    /// builder leaves the solver untouched.
    pub fn build(self, solver: &mut Solver<F>) -> Result<Body<F>, PhysicsError> {
        let count = self.vertices.len();
        for &(a, b) in &self.links {
            for index in [a, b] {
                if index >= count {
                    return Err(PhysicsError::PointOutOfBounds { index, count });
                }
            }
            if a == b {
                return Err(PhysicsError::SelfLink { index: a });
            }
        }

        let points: AllocVec<PointId> = self
            .vertices
            .iter()
            .zip(&self.pinned)
            .map(|(v, &pinned)| {
                if pinned {
                    solver.add_pinned_point(v.x, v.y)
                } else {
                    solver.add_point(v.x, v.y)
                }
            })
            .collect();

        let mut links = AllocVec::with_capacity(self.links.len());
        for &(a, b) in &self.links {
            links.push(solver.add_link(points[a], points[b])?);
        }

        log::debug!(
            "built body with {} points and {} links",
            points.len(),
            links.len()
        );

        Ok(Body {
            points,
            links,
            rest_pose: self.vertices,
        })
    }
}

/// A group of points and links inside one solver, with a pose to reset to.
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    points: AllocVec<PointId>,
    links: AllocVec<LinkId>,
    rest_pose: AllocVec<Vec2<F>>,
}

impl<F: Float> Body<F> {
    pub fn points(&self) -> &[PointId] { &self.points }
    pub fn links(&self) -> &[LinkId] { &self.links }
    pub fn rest_pose(&self) -> &[Vec2<F>] { &self.rest_pose }

    /// Put every point back at rest in the rest pose.
    pub fn reset(&self, solver: &mut Solver<F>) -> Result<(), PhysicsError> {
        for (&id, &pos) in self.points.iter().zip(&self.rest_pose) {
            solver.set_rest_state(id, pos)?;
        }
        Ok(())
    }

    /// Make the current positions the pose used by `reset`.
    pub fn capture_rest_pose(&mut self, solver: &Solver<F>) -> Result<(), PhysicsError> {
        let mut pose = AllocVec::with_capacity(self.points.len());
        for &id in &self.points {
            pose.push(solver.point(id)?.position);
        }
        self.rest_pose = pose;
        Ok(())
    }

    /// Mean position of the body's points.
    pub fn centroid(&self, solver: &Solver<F>) -> Result<Vec2<F>, PhysicsError> {
        if self.points.is_empty() {
            return Ok(Vec2::zero());
        }
        let mut sum = Vec2::zero();
        for &id in &self.points {
            sum += solver.point(id)?.position;
        }
        Ok(sum.scale(F::one() / F::from_f32(self.points.len() as f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;

    #[test]
    fn hexagon_link_counts() {
        let c = Vec2::new(300.0f32, 200.0);
        assert_eq!(BodyBuilder::hexagon(c, 100.0, HexBracing::Rim).link_count(), 6);
        assert_eq!(BodyBuilder::hexagon(c, 100.0, HexBracing::Triangle).link_count(), 9);
        assert_eq!(BodyBuilder::hexagon(c, 100.0, HexBracing::Full).link_count(), 15);
    }

    #[test]
    fn hexagon_vertices_on_radius() {
        let c = Vec2::new(300.0f32, 200.0);
        let builder = BodyBuilder::hexagon(c, 100.0, HexBracing::Rim);
        for v in &builder.vertices {
            assert!((v.distance(c) - 100.0).abs() < 1e-3);
        }
        assert_eq!(builder.vertices[0], Vec2::new(300.0, 100.0));
        assert_eq!(builder.vertices[3], Vec2::new(300.0, 300.0));
    }

    #[test]
    fn bad_link_leaves_solver_untouched() {
        let mut solver: Solver<f32> = Solver::new(SolverConfig::new()).unwrap();
        let builder = BodyBuilder::braced_box(Vec2::new(0.0, 0.0), 10.0, 10.0, Diagonals::None)
            .link(0, 7);
        assert_eq!(
            builder.build(&mut solver).unwrap_err(),
            PhysicsError::PointOutOfBounds { index: 7, count: 4 }
        );
        assert_eq!(solver.point_count(), 0);
        assert_eq!(solver.link_count(), 0);
    }

    #[test]
    fn pin_marks_vertex() {
        let mut solver: Solver<f32> = Solver::new(SolverConfig::new()).unwrap();
        let body = BodyBuilder::from_points(&[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)])
            .pin(1)
            .pin(9)
            .link(0, 1)
            .build(&mut solver)
            .unwrap();
        assert!(!solver.point(body.points()[0]).unwrap().pinned);
        assert!(solver.point(body.points()[1]).unwrap().pinned);
    }
}
