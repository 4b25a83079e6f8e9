//! Timer-driven wrapper around [`MessageQueue`].
//!
//! ARCHITECTURE
//! ============
//! `MessageDisplay` owns the queue, exactly one dismissal timer handle and
//! two hooks: `on_change` (render the active message) and `on_activate`
//! (play the notification cue). Hooks are always invoked after the internal
//! borrow is released, so a hook may call `enqueue` re-entrantly.
//!
//! Teardown cancels the armed timer, drops the backlog and detaches the
//! hooks; after that the display ignores every call.

#[cfg(test)]
#[path = "message_display_test.rs"]
mod message_display_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::message_queue::{Activation, Dismissal, Enqueued, MessageQueue, Phase, Ticket};
use crate::util::timer::Scheduler;

type ChangeHook = Rc<dyn Fn(Option<&str>)>;
type ActivateHook = Rc<dyn Fn(&str)>;

pub struct MessageDisplay<S: Scheduler> {
    inner: Rc<RefCell<Inner<S>>>,
    scheduler: S,
}

struct Inner<S: Scheduler> {
    queue: MessageQueue,
    timer: Option<S::Handle>,
    on_change: Option<ChangeHook>,
    on_activate: Option<ActivateHook>,
    closed: bool,
}

impl<S: Scheduler> Clone for MessageDisplay<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), scheduler: self.scheduler.clone() }
    }
}

impl<S: Scheduler> MessageDisplay<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                queue: MessageQueue::new(),
                timer: None,
                on_change: None,
                on_activate: None,
                closed: false,
            })),
            scheduler,
        }
    }

    /// Called with the new active message, or `None` when it clears.
    #[must_use]
    pub fn on_change(self, hook: impl Fn(Option<&str>) + 'static) -> Self {
        self.inner.borrow_mut().on_change = Some(Rc::new(hook));
        self
    }

    /// Called once each time a message becomes active.
    #[must_use]
    pub fn on_activate(self, hook: impl Fn(&str) + 'static) -> Self {
        self.inner.borrow_mut().on_activate = Some(Rc::new(hook));
        self
    }

    pub fn enqueue(&self, message: impl Into<String>) {
        let activation = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            match inner.queue.enqueue(message.into()) {
                Enqueued::Activated(activation) => activation,
                Enqueued::Queued { .. } => return,
            }
        };
        self.start(activation);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.borrow().queue.phase()
    }

    #[must_use]
    pub fn active(&self) -> Option<String> {
        self.inner.borrow().queue.active().map(str::to_owned)
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().queue.pending_len()
    }

    #[must_use]
    pub fn has_armed_timer(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    /// Cancel the dismissal timer and stop all further transitions.
    pub fn teardown(&self) {
        let (timer, hooks) = {
            let mut inner = self.inner.borrow_mut();
            inner.closed = true;
            inner.queue.teardown();
            (inner.timer.take(), (inner.on_change.take(), inner.on_activate.take()))
        };
        drop(timer);
        drop(hooks);
    }

    fn start(&self, activation: Activation) {
        // A dismissal hook may have torn the display down before the next
        // message starts.
        if self.inner.borrow().closed {
            return;
        }
        let ticket = activation.ticket;
        let weak = Rc::downgrade(&self.inner);
        let scheduler = self.scheduler.clone();
        let handle = self
            .scheduler
            .schedule(activation.duration, move || elapse(&weak, &scheduler, ticket));

        let (replaced, on_change, on_activate) = {
            let mut inner = self.inner.borrow_mut();
            let replaced = inner.timer.replace(handle);
            (replaced, inner.on_change.clone(), inner.on_activate.clone())
        };
        drop(replaced);

        if let Some(hook) = on_change {
            hook(Some(&activation.message));
        }
        if let Some(hook) = on_activate {
            hook(&activation.message);
        }
    }

    fn dismiss(&self, ticket: Ticket) {
        let (outcome, fired, on_change) = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            let outcome = inner.queue.dismiss(ticket);
            if outcome == Dismissal::Stale {
                return;
            }
            (outcome, inner.timer.take(), inner.on_change.clone())
        };
        drop(fired);

        if let Some(hook) = on_change {
            hook(None);
        }
        if let Dismissal::Next(next) = outcome {
            self.start(next);
        }
    }
}

fn elapse<S: Scheduler>(weak: &Weak<RefCell<Inner<S>>>, scheduler: &S, ticket: Ticket) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    MessageDisplay { inner, scheduler: scheduler.clone() }.dismiss(ticket);
}
