//! Configuration types for the solver.

use crate::error::PhysicsError;
use crate::float::Float;

/// Which walls of the world rectangle push points back.
///
/// `y` grows downward, so the floor is at `height` and the top edge at `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryPolicy {
    /// Floor at `height`, walls at `0` and `width`, nothing above `y = 0`.
    #[default]
    FloorAndWalls,
    /// `FloorAndWalls` plus a ceiling at `y = 0`.
    Enclosed,
    /// No boundary response.
    Open,
}

/// World rectangle `[0, width] x [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }
}

/// Configuration for the solver and its points.
///
/// All per-step quantities are unscaled: a call to `step` is one unit of
/// time, so visual speed follows the caller's frame rate.
///
/// # Builder Pattern
/// ```
/// use softbody2d::config::{BoundaryPolicy, SolverConfig};
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_gravity(0.25)
///     .with_iterations(20)
///     .with_bounds(320.0, 240.0)
///     .with_boundary(BoundaryPolicy::Enclosed);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Added to `position.y` of every free point each step. Default: 0.5.
    pub gravity: F,
    /// Decay applied to the implied velocity each step. Default: 0.99999.
    ///
    /// The model wants a value just below 1. Exactly 1.0 (no decay) is also
    /// accepted, which makes hand-checked trajectories exact; `validate`
    /// rejects anything outside (0, 1].
    pub friction: F,
    /// Fraction of velocity kept when reflecting off a wall, in [0, 1]. Default: 0.9.
    pub bounce_damping: F,
    /// Relaxation passes over all links per step. Default: 50.
    pub iterations: usize,
    /// Divides each link correction; larger is softer. Default: 30.
    pub stiffness_divisor: F,
    /// World rectangle. Default: 800 x 600.
    pub bounds: Bounds<F>,
    /// Default: `FloorAndWalls`.
    pub boundary: BoundaryPolicy,
    /// Exclusive radius for nearest-point picking. Default: 20.
    pub pick_radius: F,
    /// Stop relaxing once the worst link error is at or below this.
    /// Default: `None` (always run every pass).
    pub convergence_tolerance: Option<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            gravity: F::from_f32(0.5),
            friction: F::from_f32(0.99999),
            bounce_damping: F::from_f32(0.9),
            iterations: 50,
            stiffness_divisor: F::from_f32(30.0),
            bounds: Bounds::new(F::from_f32(800.0), F::from_f32(600.0)),
            boundary: BoundaryPolicy::FloorAndWalls,
            pick_radius: F::from_f32(20.0),
            convergence_tolerance: None,
        }
    }

    /// Set the per-step gravity.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the velocity decay factor.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the wall reflection damping.
    pub fn with_bounce_damping(mut self, bounce_damping: F) -> Self {
        self.bounce_damping = bounce_damping;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the link correction divisor.
    pub fn with_stiffness_divisor(mut self, divisor: F) -> Self {
        self.stiffness_divisor = divisor;
        self
    }

    /// Set the world rectangle.
    pub fn with_bounds(mut self, width: F, height: F) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Set which walls respond.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the pick radius.
    pub fn with_pick_radius(mut self, radius: F) -> Self {
        self.pick_radius = radius;
        self
    }

    /// Opt into early exit from relaxation.
    pub fn with_convergence_tolerance(mut self, tolerance: F) -> Self {
        self.convergence_tolerance = Some(tolerance);
        self
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let zero = F::zero();
        let one = F::one();
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity);
        }
        if !(self.friction > zero && self.friction <= one) {
            return Err(PhysicsError::InvalidFriction);
        }
        if !(self.bounce_damping >= zero && self.bounce_damping <= one) {
            return Err(PhysicsError::InvalidBounceDamping);
        }
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidIterations);
        }
        if !(self.stiffness_divisor.is_finite() && self.stiffness_divisor >= one) {
            return Err(PhysicsError::InvalidStiffnessDivisor);
        }
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite() && width > zero && height > zero) {
            return Err(PhysicsError::InvalidBounds);
        }
        if !(self.pick_radius.is_finite() && self.pick_radius >= zero) {
            return Err(PhysicsError::InvalidPickRadius);
        }
        if let Some(tol) = self.convergence_tolerance {
            if !(tol.is_finite() && tol > zero) {
                return Err(PhysicsError::InvalidTolerance);
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.iterations, 50);
        assert_eq!(config.boundary, BoundaryPolicy::FloorAndWalls);
        assert_eq!(config.convergence_tolerance, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base: SolverConfig<f64> = SolverConfig::new();
        assert_eq!(base.with_friction(0.0).validate(), Err(PhysicsError::InvalidFriction));
        assert_eq!(base.with_friction(1.5).validate(), Err(PhysicsError::InvalidFriction));
        assert_eq!(base.with_friction(1.0).validate(), Ok(()));
        assert_eq!(
            base.with_bounce_damping(-0.1).validate(),
            Err(PhysicsError::InvalidBounceDamping)
        );
        assert_eq!(base.with_iterations(0).validate(), Err(PhysicsError::InvalidIterations));
        assert_eq!(
            base.with_stiffness_divisor(0.5).validate(),
            Err(PhysicsError::InvalidStiffnessDivisor)
        );
        assert_eq!(base.with_bounds(0.0, 10.0).validate(), Err(PhysicsError::InvalidBounds));
        assert_eq!(base.with_gravity(f64::NAN).validate(), Err(PhysicsError::InvalidGravity));
        assert_eq!(base.with_pick_radius(-1.0).validate(), Err(PhysicsError::InvalidPickRadius));
        assert_eq!(
            base.with_convergence_tolerance(0.0).validate(),
            Err(PhysicsError::InvalidTolerance)
        );
    }

    #[test]
    fn prototype_settings_are_expressible() {
        let config: SolverConfig<f32> = SolverConfig::new()
            .with_iterations(5)
            .with_stiffness_divisor(2.0)
            .with_bounce_damping(0.7)
            .with_friction(0.999);
        assert_eq!(config.validate(), Ok(()));
    }
}
