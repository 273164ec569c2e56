//! Call-scoped traversal tracking.
//!
//! Each top-level rendering call owns one [`Tracker`]: a stack of reference
//! identities currently being rendered plus the current aggregate depth.
//! Entries are pushed on entering a reference and popped on leaving it, so a
//! shared-but-acyclic substructure is rendered every time it is reached; only
//! an identity re-entered while still on the stack is reported as a cycle.
//! Nothing here persists across calls.

/// Why a traversal step was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The identity is already on the active rendering stack.
    Cycle,
    /// Entering would exceed the configured maximum depth.
    TooDeep,
}

#[derive(Debug)]
pub(crate) struct Tracker {
    active: Vec<usize>,
    depth: usize,
    max_depth: usize,
}

impl Tracker {
    pub(crate) fn new(max_depth: usize) -> Self {
        Tracker {
            active: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Whether an identity is currently on the rendering stack.
    pub(crate) fn entered(&self, id: usize) -> bool {
        self.active.contains(&id)
    }

    /// Records a traversal step: `Some(id)` enters a reference, `None` enters
    /// an aggregate level. On `Err` nothing is recorded.
    pub(crate) fn enter(&mut self, id: Option<usize>) -> Result<(), Halt> {
        match id {
            Some(id) => {
                if self.active.contains(&id) {
                    return Err(Halt::Cycle);
                }
                self.active.push(id);
                Ok(())
            }
            None => {
                if self.max_depth != 0 && self.depth >= self.max_depth {
                    return Err(Halt::TooDeep);
                }
                self.depth += 1;
                Ok(())
            }
        }
    }

    /// Undoes a successful [`enter`](Tracker::enter) with the same argument.
    pub(crate) fn leave(&mut self, id: Option<usize>) {
        match id {
            Some(id) => {
                if let Some(pos) = self.active.iter().rposition(|&a| a == id) {
                    self.active.remove(pos);
                }
            }
            None => {
                self.depth = self.depth.saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_detection_is_stack_scoped() {
        let mut tracker = Tracker::new(0);
        tracker.enter(Some(0x10)).unwrap();
        assert_eq!(tracker.enter(Some(0x10)), Err(Halt::Cycle));
        tracker.leave(Some(0x10));
        // Shared-but-acyclic: the same identity may be entered again once left.
        tracker.enter(Some(0x10)).unwrap();
    }

    #[test]
    fn test_depth_bound() {
        let mut tracker = Tracker::new(1);
        tracker.enter(None).unwrap();
        assert_eq!(tracker.enter(None), Err(Halt::TooDeep));
        tracker.leave(None);
        assert_eq!(tracker.depth(), 0);
        tracker.enter(None).unwrap();
    }

    #[test]
    fn test_unlimited_depth() {
        let mut tracker = Tracker::new(0);
        for _ in 0..1000 {
            tracker.enter(None).unwrap();
        }
        assert_eq!(tracker.depth(), 1000);
    }

    #[test]
    fn test_references_do_not_consume_depth() {
        let mut tracker = Tracker::new(1);
        tracker.enter(Some(0x20)).unwrap();
        tracker.enter(None).unwrap();
        assert_eq!(tracker.enter(None), Err(Halt::TooDeep));
        assert!(tracker.entered(0x20));
    }
}
