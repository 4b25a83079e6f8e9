//! Message display queue for the floating assistant.
//!
//! DESIGN
//! ======
//! A pure two-state machine (`Idle` / `Showing`) with no timers of its own.
//! Every activation hands out a `Ticket`; the owner arms a dismissal timer
//! and reports back with that ticket when it elapses. Tickets from a
//! cancelled or torn-down activation are stale and ignored, so a late timer
//! callback can never advance the queue.
//!
//! The timer-driven wrapper lives in `util::message_display`.

#[cfg(test)]
#[path = "message_queue_test.rs"]
mod message_queue_test;

use std::collections::VecDeque;
use std::time::Duration;

/// Shortest time any message stays on screen.
pub const MIN_DISPLAY: Duration = Duration::from_millis(3000);

/// Additional display time granted per character of text.
pub const PER_CHAR_MS: u64 = 50;

/// How long `message` stays active: `max(3000ms, chars * 50ms)`.
///
/// Length is counted in Unicode scalar values, so an emoji outside the BMP
/// counts once rather than as two UTF-16 units.
#[must_use]
pub fn display_duration(message: &str) -> Duration {
    let chars = u64::try_from(message.chars().count()).unwrap_or(u64::MAX);
    Duration::from_millis(chars.saturating_mul(PER_CHAR_MS)).max(MIN_DISPLAY)
}

/// Identifies one activation of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A message that just became active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub message: String,
    pub duration: Duration,
    pub ticket: Ticket,
}

/// Result of [`MessageQueue::enqueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Enqueued {
    /// The queue was idle; the message is now active.
    Activated(Activation),
    /// Another message is showing; the message waits at `position` (0-based).
    Queued { position: usize },
}

/// Result of [`MessageQueue::dismiss`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dismissal {
    /// The ticket does not belong to the active message.
    Stale,
    /// The active message was cleared and nothing is pending.
    Idle,
    /// The active message was cleared and the next pending one took its place.
    Next(Activation),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Showing,
}

#[derive(Clone, Debug, Default)]
pub struct MessageQueue {
    active: Option<(String, Ticket)>,
    pending: VecDeque<String>,
    next_ticket: u64,
}

impl MessageQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.active.is_some() { Phase::Showing } else { Phase::Idle }
    }

    /// Text of the message currently on screen.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_ref().map(|(message, _)| message.as_str())
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pending messages in display order.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    /// Show `message` now if idle, otherwise append it to the backlog.
    pub fn enqueue(&mut self, message: String) -> Enqueued {
        if self.active.is_some() {
            self.pending.push_back(message);
            return Enqueued::Queued { position: self.pending.len() - 1 };
        }
        Enqueued::Activated(self.activate(message))
    }

    /// Clear the active message identified by `ticket` and advance the backlog.
    pub fn dismiss(&mut self, ticket: Ticket) -> Dismissal {
        match &self.active {
            Some((_, active)) if *active == ticket => {}
            _ => return Dismissal::Stale,
        }
        self.active = None;
        match self.pending.pop_front() {
            Some(next) => Dismissal::Next(self.activate(next)),
            None => Dismissal::Idle,
        }
    }

    /// Drop the active message and the backlog. Outstanding tickets become stale.
    pub fn teardown(&mut self) {
        self.active = None;
        self.pending.clear();
    }

    fn activate(&mut self, message: String) -> Activation {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let duration = display_duration(&message);
        self.active = Some((message.clone(), ticket));
        Activation { message, duration, ticket }
    }
}
