//! The solver: owns points and links and advances them one step at a time.

use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{LinkId, PointId, SolverId};
use crate::link::Link;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Summary of one call to `Solver::step_observed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Relaxation passes actually run.
    pub passes: usize,
    /// Link relaxations skipped because the endpoints coincided.
    pub skipped_relaxations: usize,
}

/// Owns a set of points and the links between them.
///
/// Points are only ever appended, so `PointId`s and the indices inside
/// links stay valid for the solver's lifetime.
pub struct Solver<F: Float> {
    id: SolverId,
    config: SolverConfig<F>,
    points: AllocVec<Point<F>>,
    links: AllocVec<Link<F>>,
}

impl<F: Float> Solver<F> {
    pub fn new(config: SolverConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let id = SolverId::next().ok_or(PhysicsError::SolverIdsExhausted)?;
        Ok(Solver {
            id,
            config,
            points: AllocVec::new(),
            links: AllocVec::new(),
        })
    }

    pub fn id(&self) -> SolverId { self.id }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }

    /// Add a free point at rest.
    pub fn add_point(&mut self, x: F, y: F) -> PointId {
        self.push_point(Point::new(Vec2::new(x, y)))
    }

    /// Add an anchor.
    pub fn add_pinned_point(&mut self, x: F, y: F) -> PointId {
        self.push_point(Point::pinned(Vec2::new(x, y)))
    }

    fn push_point(&mut self, point: Point<F>) -> PointId {
        let index = self.points.len();
        self.points.push(point);
        PointId { solver: self.id, index }
    }

    /// Link two points at their current separation.
    pub fn add_link(&mut self, a: PointId, b: PointId) -> Result<LinkId, PhysicsError> {
        let a = self.check_point(a)?;
        let b = self.check_point(b)?;
        if a == b {
            log::debug!("rejected self-link on point {}", a);
            return Err(PhysicsError::SelfLink { index: a });
        }
        let link = Link::between(a, b, &self.points);
        log::debug!(
            "solver {}: link {} joins points {} and {} (rest length {:?})",
            self.id.get(),
            self.links.len(),
            a,
            b,
            link.rest_length()
        );
        let index = self.links.len();
        self.links.push(link);
        Ok(LinkId { solver: self.id, index })
    }

    // Handles are only minted by this solver and nothing is ever removed, so
    // a handle carrying our tag always indexes in range.
    fn check_point(&self, id: PointId) -> Result<usize, PhysicsError> {
        if id.solver != self.id {
            log::debug!(
                "solver {} rejected a handle from solver {}",
                self.id.get(),
                id.solver.get()
            );
            return Err(PhysicsError::ForeignHandle {
                expected: self.id.get(),
                found: id.solver.get(),
            });
        }
        Ok(id.index)
    }

    fn check_link(&self, id: LinkId) -> Result<usize, PhysicsError> {
        if id.solver != self.id {
            return Err(PhysicsError::ForeignHandle {
                expected: self.id.get(),
                found: id.solver.get(),
            });
        }
        Ok(id.index)
    }

    /// Advance one step.
    pub fn step(&mut self) -> StepReport {
        self.step_observed(&mut NoOpStepObserver)
    }

    /// Advance one step: integrate every point once, then run the configured
    /// number of relaxation passes over the links in insertion order.
    ///
    /// Passes only stop early when `convergence_tolerance` is set.
    pub fn step_observed<O: StepObserver>(&mut self, observer: &mut O) -> StepReport {
        let mut report = StepReport::default();

        for p in self.points.iter_mut() {
            p.integrate(&self.config);
        }
        observer.on_integrate();

        for pass in 0..self.config.iterations {
            for link in self.links.iter() {
                if !link.relax(&mut self.points, self.config.stiffness_divisor) {
                    report.skipped_relaxations += 1;
                }
            }
            report.passes += 1;
            observer.on_relaxation_pass(pass);

            if let Some(tol) = self.config.convergence_tolerance {
                if self.max_link_error() <= tol {
                    break;
                }
            }
        }

        log::trace!(
            "solver {}: step ran {} passes, skipped {} relaxations",
            self.id.get(),
            report.passes,
            report.skipped_relaxations
        );
        if !self.is_finite() {
            log::warn!("solver {}: non-finite point position after step", self.id.get());
        }

        observer.on_step_complete();
        report
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn links(&self) -> &[Link<F>] { &self.links }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Handles for every point, in insertion order.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len()).map(move |index| PointId { solver: self.id, index })
    }

    pub fn point(&self, id: PointId) -> Result<&Point<F>, PhysicsError> {
        let index = self.check_point(id)?;
        Ok(&self.points[index])
    }

    pub fn link(&self, id: LinkId) -> Result<&Link<F>, PhysicsError> {
        let index = self.check_link(id)?;
        Ok(&self.links[index])
    }

    /// Endpoint positions of every link, for drawing segments.
    pub fn link_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.links
            .iter()
            .map(move |l| (self.points[l.a()].position, self.points[l.b()].position))
    }

    /// Drag override: moves the point but keeps `previous_position`, so the
    /// displacement becomes velocity on the next step.
    pub fn set_position(&mut self, id: PointId, position: Vec2<F>) -> Result<(), PhysicsError> {
        let index = self.check_point(id)?;
        self.points[index].set_position(position);
        Ok(())
    }

    /// End of a drag. The solver keeps no drag state; this only validates
    /// the handle.
    pub fn release(&mut self, id: PointId) -> Result<(), PhysicsError> {
        self.check_point(id).map(|_| ())
    }

    /// Put the point at rest at `position`.
    pub fn set_rest_state(&mut self, id: PointId, position: Vec2<F>) -> Result<(), PhysicsError> {
        let index = self.check_point(id)?;
        self.points[index].set_rest_state(position);
        Ok(())
    }

    pub fn set_pinned(&mut self, id: PointId, pinned: bool) -> Result<(), PhysicsError> {
        let index = self.check_point(id)?;
        if pinned {
            self.points[index].pin();
        } else {
            self.points[index].unpin();
        }
        Ok(())
    }

    /// Nearest point strictly inside the configured pick radius.
    pub fn nearest_point(&self, query: Vec2<F>) -> Option<PointId> {
        self.nearest_point_within(query, self.config.pick_radius)
    }

    /// Nearest point strictly inside `radius` of `query`.
    ///
    /// Only a strictly closer point replaces the current best, so on a tie
    /// the lower insertion index wins.
    pub fn nearest_point_within(&self, query: Vec2<F>, radius: F) -> Option<PointId> {
        let mut best = None;
        let mut best_dist = radius;
        for (index, p) in self.points.iter().enumerate() {
            let dist = p.position.distance(query);
            if dist < best_dist {
                best_dist = dist;
                best = Some(PointId { solver: self.id, index });
            }
        }
        best
    }

    /// Sum of absolute link length errors.
    pub fn total_link_error(&self) -> F {
        self.links
            .iter()
            .fold(F::zero(), |acc, l| acc + l.error(&self.points))
    }

    /// Largest absolute link length error, zero without links.
    pub fn max_link_error(&self) -> F {
        self.links
            .iter()
            .fold(F::zero(), |acc, l| acc.max(l.error(&self.points)))
    }

    /// True while no point has a NaN or infinite coordinate.
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.position.is_finite() && p.previous_position.is_finite())
    }
}
