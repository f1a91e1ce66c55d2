use std::{cell::Cell, rc::Rc};

/// Tracks which request a screen still cares about.
///
/// Every [`begin`](Self::begin) hands out a fresh [`Ticket`] and invalidates
/// the previous one, as does [`cancel`](Self::cancel). Work that resolves late
/// checks its ticket before touching state.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn begin(&self) -> Ticket {
        let id = self.generation.get() + 1;
        self.generation.set(id);
        Ticket {
            id,
            generation: self.generation.clone(),
        }
    }

    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    generation: Rc<Cell<u64>>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}
