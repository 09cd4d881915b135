//! Frame-coupled Verlet mass-spring bodies in 2D.
//!
//! `softbody2d` simulates point masses joined by fixed-length links. Each
//! step integrates every point once (inertia with friction, per-step
//! gravity, damped wall bounces) and then relaxes every link a fixed number
//! of times with a deliberately partial correction, which gives bodies their
//! soft, springy look.
//!
//! Windowing, input and drawing are left to the caller: it calls
//! [`Solver::step`] once per frame, reads positions back through
//! [`Solver::points`] and [`Solver::link_segments`], and drives dragging with
//! [`DragController`] or [`Solver::set_position`].
//!
//! # Features
//!
//! - **Verlet points**: implied velocity, pinning, drag-to-fling
//! - **Soft links**: under-relaxed distance constraints, Gauss-Seidel order
//! - **Boundaries**: configurable floor/wall/ceiling policy
//! - **Checked handles**: links cannot reference another solver's points
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use softbody2d::{BodyBuilder, HexBracing, Solver, SolverConfig, Vec2};
//!
//! let mut solver: Solver<f32> = Solver::new(SolverConfig::new()).unwrap();
//! let body = BodyBuilder::hexagon(Vec2::new(300.0, 200.0), 100.0, HexBracing::Triangle)
//!     .build(&mut solver)
//!     .unwrap();
//! for _ in 0..60 {
//!     solver.step();
//! }
//! body.reset(&mut solver).unwrap();
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod link;
pub mod handle;
pub mod solver;
pub mod body;
pub mod drag;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use link::Link;
pub use handle::{LinkId, PointId, SolverId};
pub use solver::{Solver, StepReport};
pub use body::{Body, BodyBuilder, Diagonals, HexBracing};
pub use drag::DragController;
pub use config::{BoundaryPolicy, Bounds, SolverConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
