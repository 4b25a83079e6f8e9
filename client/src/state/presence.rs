//! Simulated "other visitors" presence.
//!
//! There is no presence server. A seeded generator decides who is "viewing"
//! and how that drifts over time, so the indicator looks alive and tests can
//! replay exact sequences.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

pub const NAMES: [&str; 15] = [
    "Emma", "Noah", "Olivia", "Liam", "Ava", "William", "Sophia", "Mason", "Isabella", "James",
    "Mia", "Benjamin", "Charlotte", "Jacob", "Amelia",
];

pub const COLORS: [&str; 8] = [
    "#9b87f5", "#20b2aa", "#ff7e67", "#7e69ab", "#6e59a5", "#d946ef", "#f97316", "#0ea5e9",
];

pub const MAX_USERS: usize = 5;
pub const MAX_INITIAL_USERS: usize = 2;
pub const JOIN_PROBABILITY: f64 = 0.2;
pub const LEAVE_PROBABILITY: f64 = 0.3;
pub const MIN_TICK: Duration = Duration::from_millis(MIN_TICK_MS);
pub const MAX_TICK: Duration = Duration::from_millis(MAX_TICK_MS);
const MIN_TICK_MS: u64 = 15_000;
const MAX_TICK_MS: u64 = 30_000;
pub const MAX_AVATARS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct PresenceUser {
    pub id: String,
    pub name: String,
    pub avatar_color: String,
    pub last_active_ms: f64,
}

impl PresenceUser {
    /// Avatar initial.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Membership change produced by one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub joined: Option<String>,
    pub left: Option<String>,
}

impl TickOutcome {
    /// Whether anyone joined or left.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.joined.is_some() || self.left.is_some()
    }
}

pub struct PresenceSimulator<R: Rng> {
    rng: R,
    users: Vec<PresenceUser>,
}

impl<R: Rng> PresenceSimulator<R> {
    /// Seed the room with zero to two visitors.
    pub fn new(mut rng: R, now_ms: f64) -> Self {
        let count = rng.random_range(0..=MAX_INITIAL_USERS);
        let mut sim = Self { rng, users: Vec::with_capacity(MAX_USERS) };
        for _ in 0..count {
            let user = sim.spawn_user(now_ms);
            sim.users.push(user);
        }
        sim
    }

    #[must_use]
    pub fn users(&self) -> &[PresenceUser] {
        &self.users
    }

    /// One drift step: maybe someone joins, then maybe someone leaves.
    pub fn step(&mut self, now_ms: f64) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.users.len() < MAX_USERS && self.rng.random_bool(JOIN_PROBABILITY) {
            let user = self.spawn_user(now_ms);
            outcome.joined = Some(user.name.clone());
            self.users.push(user);
        }
        if !self.users.is_empty() && self.rng.random_bool(LEAVE_PROBABILITY) {
            let idx = self.rng.random_range(0..self.users.len());
            outcome.left = Some(self.users.remove(idx).name);
        }
        outcome
    }

    /// Delay until the next step, drawn fresh each time.
    pub fn next_interval(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(MIN_TICK_MS..=MAX_TICK_MS))
    }

    fn spawn_user(&mut self, now_ms: f64) -> PresenceUser {
        let id = format!("{:013x}", self.rng.random::<u64>() & 0x000f_ffff_ffff_ffff);
        let name = NAMES.choose(&mut self.rng).copied().unwrap_or(NAMES[0]);
        let color = COLORS.choose(&mut self.rng).copied().unwrap_or(COLORS[0]);
        PresenceUser {
            id,
            name: name.to_owned(),
            avatar_color: color.to_owned(),
            last_active_ms: now_ms,
        }
    }
}

/// Indicator contents derived from the current user list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresenceSummary {
    /// Initials and colors of the avatars drawn inline.
    pub avatars: Vec<(String, String)>,
    /// Count behind the `+N` chip; zero hides it.
    pub overflow: usize,
    pub label: String,
}

/// `None` when nobody else is viewing; the indicator is hidden then.
#[must_use]
pub fn summarize(users: &[PresenceUser]) -> Option<PresenceSummary> {
    let first = users.first()?;
    let avatars = users
        .iter()
        .take(MAX_AVATARS)
        .map(|u| (u.initial(), u.avatar_color.clone()))
        .collect();
    let label = if users.len() == 1 {
        format!("{} is viewing", first.name)
    } else {
        format!("{} people are viewing", users.len())
    };
    Some(PresenceSummary {
        avatars,
        overflow: users.len().saturating_sub(MAX_AVATARS),
        label,
    })
}
