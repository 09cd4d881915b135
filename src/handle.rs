//! Solver-tagged handles to points and links.

use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_SOLVER_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of one `Solver` instance, unique for the life of the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolverId(pub(crate) u32);

impl SolverId {
    /// Take a fresh id, or `None` once all `u32` ids have been handed out.
    pub(crate) fn next() -> Option<Self> {
        Self::next_from(&NEXT_SOLVER_ID)
    }

    fn next_from(counter: &AtomicU32) -> Option<Self> {
        counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
            .map(SolverId)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Non-owning reference to a point, valid only for the solver that issued it.
///
/// Points are never removed, so the index stays stable for the solver's
/// lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointId {
    pub(crate) solver: SolverId,
    pub(crate) index: usize,
}

impl PointId {
    /// Insertion index, which is also render order.
    pub fn index(self) -> usize {
        self.index
    }

    pub fn solver(self) -> SolverId {
        self.solver
    }
}

/// Reference to a link, valid only for the solver that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkId {
    pub(crate) solver: SolverId,
    pub(crate) index: usize,
}

impl LinkId {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn solver(self) -> SolverId {
        self.solver
    }
}
