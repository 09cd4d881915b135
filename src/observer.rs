//! Step observer trait for monitoring solver progress.

/// Hooks called from `Solver::step_observed`.
///
/// All methods default to no-ops, so an implementation only overrides what
/// it needs (debug overlays, profiling, convergence plots).
pub trait StepObserver {
    /// Called after every point has been integrated once.
    fn on_integrate(&mut self) {}

    /// Called after each full relaxation pass over the links.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when the step is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Used by `Solver::step`.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
