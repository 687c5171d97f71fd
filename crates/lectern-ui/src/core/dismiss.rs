//! Lifetime of the document-level dismiss listener.
//!
//! # Design
//! - The listener is a guard value; dropping it detaches the DOM handler.
//! - Acquire on open, release on close, and release again on teardown.
//! - At most one guard is alive, so no duplicate document handlers exist.

use crate::core::panel::Visibility;

/// Outcome of syncing the listener with the panel visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    /// A guard was acquired.
    Attached,
    /// The held guard was dropped.
    Released,
    /// Nothing to do.
    Unchanged,
}

/// Slot holding the dismiss listener guard while the panel is open.
#[derive(Debug)]
pub struct DismissListener<G> {
    guard: Option<G>,
}

impl<G> Default for DismissListener<G> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<G> DismissListener<G> {
    /// Empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { guard: None }
    }

    /// Whether a guard is currently held.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.guard.is_some()
    }

    /// Attach or detach so the slot matches `visibility`.
    ///
    /// `acquire` only runs when the panel is open and no guard is held.
    pub fn sync(&mut self, visibility: Visibility, acquire: impl FnOnce() -> G) -> ListenerChange {
        match (visibility, self.guard.is_some()) {
            (Visibility::Open, false) => {
                self.guard = Some(acquire());
                ListenerChange::Attached
            }
            (Visibility::Closed, true) => self.release(),
            _ => ListenerChange::Unchanged,
        }
    }

    /// Drop the held guard, if any.
    pub fn release(&mut self) -> ListenerChange {
        if self.guard.take().is_some() {
            ListenerChange::Released
        } else {
            ListenerChange::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingGuard(Rc<Cell<i32>>);

    impl CountingGuard {
        fn acquire(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self(Rc::clone(live))
        }
    }

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn closed_panel_never_acquires() {
        let live = Rc::new(Cell::new(0));
        let mut slot = DismissListener::new();
        let change = slot.sync(Visibility::Closed, || CountingGuard::acquire(&live));
        assert_eq!(change, ListenerChange::Unchanged);
        assert_eq!(live.get(), 0);
        assert!(!slot.is_attached());
    }

    #[test]
    fn open_acquires_once_and_close_releases() {
        let live = Rc::new(Cell::new(0));
        let mut slot = DismissListener::new();
        assert_eq!(
            slot.sync(Visibility::Open, || CountingGuard::acquire(&live)),
            ListenerChange::Attached
        );
        assert_eq!(
            slot.sync(Visibility::Open, || CountingGuard::acquire(&live)),
            ListenerChange::Unchanged
        );
        assert_eq!(live.get(), 1);

        assert_eq!(
            slot.sync(Visibility::Closed, || CountingGuard::acquire(&live)),
            ListenerChange::Released
        );
        assert_eq!(live.get(), 0);
        assert!(!slot.is_attached());
    }

    #[test]
    fn teardown_releases_open_listener() {
        let live = Rc::new(Cell::new(0));
        let mut slot = DismissListener::new();
        slot.sync(Visibility::Open, || CountingGuard::acquire(&live));
        assert_eq!(slot.release(), ListenerChange::Released);
        assert_eq!(slot.release(), ListenerChange::Unchanged);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn repeated_open_close_cycles_never_leak() {
        let live = Rc::new(Cell::new(0));
        let mut slot = DismissListener::new();
        for _ in 0..5 {
            slot.sync(Visibility::Open, || CountingGuard::acquire(&live));
            assert_eq!(live.get(), 1);
            slot.sync(Visibility::Closed, || CountingGuard::acquire(&live));
            assert_eq!(live.get(), 0);
        }
    }

    #[test]
    fn dropping_the_slot_drops_the_guard() {
        let live = Rc::new(Cell::new(0));
        {
            let mut slot = DismissListener::new();
            slot.sync(Visibility::Open, || CountingGuard::acquire(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }
}
