//! Verlet point masses with frame-coupled integration.

use crate::config::{BoundaryPolicy, SolverConfig};
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point: velocity is implied by `position - previous_position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub position: Vec2<F>,
    pub previous_position: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Point<F> {
    /// A free point at rest.
    pub fn new(position: Vec2<F>) -> Self {
        Point {
            position,
            previous_position: position,
            pinned: false,
        }
    }

    /// An anchor that integration and relaxation never move.
    pub fn pinned(position: Vec2<F>) -> Self {
        Point {
            position,
            previous_position: position,
            pinned: true,
        }
    }

    /// Advance one step: decayed inertia, gravity, then boundary response.
    ///
    /// The wall response reflects the pre-collision velocity by rewriting
    /// `previous_position` on the colliding axis, so the next step carries
    /// the bounce.
    pub fn integrate(&mut self, config: &SolverConfig<F>) {
        if self.pinned {
            return;
        }
        let velocity = (self.position - self.previous_position).scale(config.friction);
        self.previous_position = self.position;
        self.position += velocity;
        self.position.y = self.position.y + config.gravity;

        self.collide(velocity, config);
    }

    fn collide(&mut self, velocity: Vec2<F>, config: &SolverConfig<F>) {
        let zero = F::zero();
        let bounce = config.bounce_damping;
        let width = config.bounds.width;
        let height = config.bounds.height;

        match config.boundary {
            BoundaryPolicy::Open => return,
            BoundaryPolicy::FloorAndWalls => {
                if self.position.y > height {
                    self.position.y = height;
                    self.previous_position.y = self.position.y + velocity.y * bounce;
                }
            }
            BoundaryPolicy::Enclosed => {
                if self.position.y > height {
                    self.position.y = height;
                    self.previous_position.y = self.position.y + velocity.y * bounce;
                } else if self.position.y < zero {
                    self.position.y = zero;
                    self.previous_position.y = self.position.y + velocity.y * bounce;
                }
            }
        }

        if self.position.x > width {
            self.position.x = width;
            self.previous_position.x = self.position.x + velocity.x * bounce;
        } else if self.position.x < zero {
            self.position.x = zero;
            self.previous_position.x = self.position.x + velocity.x * bounce;
        }
    }

    /// Displacement carried into the next step, before friction.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.previous_position
    }

    /// Move the point without touching `previous_position`.
    ///
    /// The next integration sees the full displacement as velocity, which is
    /// what makes a released drag fling the body.
    pub fn set_position(&mut self, position: Vec2<F>) {
        self.position = position;
    }

    /// Place the point at rest at `position`.
    pub fn set_rest_state(&mut self, position: Vec2<F>) {
        self.position = position;
        self.previous_position = position;
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.previous_position = self.position;
    }

    /// Release an anchor at rest. Moves made while pinned never became
    /// velocity, so they must not be released as one.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.previous_position = self.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weightless() -> SolverConfig<f32> {
        SolverConfig::new().with_gravity(0.0).with_friction(1.0)
    }

    #[test]
    fn new_point_is_at_rest() {
        let p = Point::new(Vec2::new(3.0f32, 4.0));
        assert_eq!(p.velocity(), Vec2::zero());
        assert!(!p.pinned);
    }

    #[test]
    fn gravity_is_added_per_step() {
        let config: SolverConfig<f32> = SolverConfig::new().with_friction(1.0);
        let mut p = Point::new(Vec2::new(100.0f32, 100.0));
        p.integrate(&config);
        assert_eq!(p.position, Vec2::new(100.0, 100.5));
        p.integrate(&config);
        assert_eq!(p.position, Vec2::new(100.0, 101.5));
    }

    #[test]
    fn floor_reflects_damped_velocity() {
        let config = weightless().with_bounce_damping(0.5);
        let mut p = Point::new(Vec2::new(50.0f32, 596.0));
        p.previous_position = Vec2::new(50.0, 588.0);
        p.integrate(&config);
        assert_eq!(p.position.y, 600.0);
        // previous = floor + 8 * 0.5
        assert_eq!(p.previous_position.y, 604.0);
        assert!(p.velocity().y < 0.0);
    }

    #[test]
    fn walls_reflect_on_x() {
        let config = weightless();
        let mut right = Point::new(Vec2::new(798.0f32, 10.0));
        right.previous_position = Vec2::new(794.0, 10.0);
        right.integrate(&config);
        assert_eq!(right.position.x, 800.0);
        assert!(right.velocity().x < 0.0);

        let mut left = Point::new(Vec2::new(1.0f32, 10.0));
        left.previous_position = Vec2::new(4.0, 10.0);
        left.integrate(&config);
        assert_eq!(left.position.x, 0.0);
        assert!(left.velocity().x > 0.0);
    }

    #[test]
    fn open_policy_ignores_bounds() {
        let config = weightless().with_boundary(BoundaryPolicy::Open);
        let mut p = Point::new(Vec2::new(-5.0f32, 700.0));
        p.previous_position = Vec2::new(-4.0, 690.0);
        p.integrate(&config);
        assert_eq!(p.position, Vec2::new(-6.0, 710.0));
    }

    #[test]
    fn pin_clears_implied_velocity() {
        let mut p = Point::new(Vec2::new(0.0f32, 0.0));
        p.set_position(Vec2::new(10.0, 0.0));
        p.pin();
        assert_eq!(p.velocity(), Vec2::zero());
        p.unpin();
        assert!(!p.pinned);
    }

    #[test]
    fn unpin_drops_moves_made_while_pinned() {
        let config: SolverConfig<f32> = SolverConfig::new().with_friction(1.0);
        let mut p = Point::pinned(Vec2::new(100.0f32, 100.0));
        for i in 1..=10 {
            p.set_position(Vec2::new(100.0 + 5.0 * i as f32, 100.0));
            p.integrate(&config);
        }
        assert_eq!(p.velocity(), Vec2::new(50.0, 0.0));

        p.unpin();
        assert_eq!(p.velocity(), Vec2::zero());
        p.integrate(&config);
        assert_eq!(p.position, Vec2::new(150.0, 100.5));
    }
}
