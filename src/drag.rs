//! Pick-and-drag state for an input collaborator.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::PointId;
use crate::solver::Solver;
use crate::vec::Vec2;

/// Tracks which point the cursor holds. Owned by the caller; the solver
/// keeps no drag state.
///
/// Per frame: `grab` on press, `drag_to` while held (before `step`),
/// `release` on button up. Because dragging only overrides `position`,
/// letting go mid-motion flings the body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    selected: Option<PointId>,
}

impl DragController {
    pub fn new() -> Self {
        DragController { selected: None }
    }

    /// Select the nearest point within the solver's pick radius. A miss
    /// leaves any current selection untouched.
    pub fn grab<F: Float>(&mut self, solver: &Solver<F>, cursor: Vec2<F>) -> Option<PointId> {
        let picked = solver.nearest_point(cursor);
        if picked.is_some() {
            self.selected = picked;
        }
        picked
    }

    /// Move the held point to the cursor. Does nothing when nothing is held.
    pub fn drag_to<F: Float>(&self, solver: &mut Solver<F>, cursor: Vec2<F>) -> Result<(), PhysicsError> {
        match self.selected {
            Some(id) => solver.set_position(id, cursor),
            None => Ok(()),
        }
    }

    /// Let go of the held point, if any.
    pub fn release<F: Float>(&mut self, solver: &mut Solver<F>) -> Result<(), PhysicsError> {
        match self.selected.take() {
            Some(id) => solver.release(id),
            None => Ok(()),
        }
    }

    pub fn selected(&self) -> Option<PointId> { self.selected }
    pub fn is_dragging(&self) -> bool { self.selected.is_some() }
}
