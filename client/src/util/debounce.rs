//! Trailing-edge debounce over a [`Scheduler`].

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::util::timer::Scheduler;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Runs only the most recent callback once `delay` passes without another
/// call. Dropping the debouncer (every clone of it) cancels the pending run.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    slot: Rc<RefCell<Option<S::Handle>>>,
    pending: Rc<Cell<bool>>,
}

impl<S: Scheduler> Clone for Debouncer<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            delay: self.delay,
            slot: Rc::clone(&self.slot),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            slot: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self, callback: impl FnOnce() + 'static) {
        let pending = Rc::clone(&self.pending);
        pending.set(true);
        let handle = self.scheduler.schedule(self.delay, move || {
            pending.set(false);
            callback();
        });
        // Replacing the handle cancels the previous timer.
        let previous = self.slot.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.slot.borrow_mut().take();
        drop(previous);
        self.pending.set(false);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
