//! One-shot timer abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timer-driven widgets (assistant messages, search debounce, presence ticks)
//! are written against `Scheduler` so their state transitions can be driven
//! by a virtual clock in native tests. In the browser the scheduler is backed
//! by `gloo_timers::callback::Timeout`; under SSR timers never fire.
//!
//! Every scheduler returns a handle that cancels the pending callback when
//! dropped. Owners keep at most one handle per timer slot, so replacing the
//! handle cancels the previous timer.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

pub trait Scheduler: Clone + 'static {
    /// Cancels the scheduled callback when dropped.
    type Handle: 'static;

    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Clamp a delay to the `u32` millisecond range browser timers accept.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Browser timers via `gloo-timers`. A no-op outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        gloo_timers::callback::Timeout::new(delay_millis(delay), callback)
    }
}

#[cfg(not(feature = "hydrate"))]
impl Scheduler for BrowserScheduler {
    type Handle = ();

    fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        let _ = (delay, callback);
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use super::Scheduler;

    /// Virtual-time scheduler for tests. Callbacks only run inside `advance`.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    #[derive(Default)]
    struct Inner {
        now: Duration,
        seq: u64,
        timers: Vec<Pending>,
    }

    struct Pending {
        due: Duration,
        seq: u64,
        live: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    pub(crate) struct ManualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl ManualScheduler {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn now(&self) -> Duration {
            self.inner.borrow().now
        }

        /// Timers that are still armed.
        pub(crate) fn armed(&self) -> usize {
            self.inner.borrow().timers.iter().filter(|t| t.live.get()).count()
        }

        pub(crate) fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }

        /// Move the clock forward, firing due callbacks in (due, arming) order.
        /// Callbacks run with no internal borrow held and may arm new timers.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut inner = self.inner.borrow_mut();
                    inner.timers.retain(|t| t.live.get());
                    let index = inner
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.seq))
                        .map(|(i, _)| i);
                    index.map(|i| {
                        let pending = inner.timers.swap_remove(i);
                        inner.now = pending.due;
                        pending
                    })
                };
                match next {
                    Some(pending) => (pending.callback)(),
                    None => break,
                }
            }
            self.inner.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule<F>(&self, delay: Duration, callback: F) -> Self::Handle
        where
            F: FnOnce() + 'static,
        {
            let live = Rc::new(Cell::new(true));
            let mut inner = self.inner.borrow_mut();
            let due = inner.now + delay;
            let seq = inner.seq;
            inner.seq += 1;
            inner.timers.push(Pending { due, seq, live: Rc::clone(&live), callback: Box::new(callback) });
            ManualHandle { live }
        }
    }
}
