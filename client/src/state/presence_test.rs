use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn sim(seed: u64) -> PresenceSimulator<SmallRng> {
    PresenceSimulator::new(SmallRng::seed_from_u64(seed), 1_000.0)
}

fn user(name: &str) -> PresenceUser {
    PresenceUser {
        id: name.to_lowercase(),
        name: name.to_owned(),
        avatar_color: COLORS[0].to_owned(),
        last_active_ms: 0.0,
    }
}

// =============================================================
// Simulation bounds
// =============================================================

#[test]
fn initial_population_is_at_most_two() {
    for seed in 0..200 {
        let sim = sim(seed);
        assert!(sim.users().len() <= MAX_INITIAL_USERS, "seed {seed}");
    }
}

#[test]
fn initial_population_covers_zero_to_two() {
    let mut seen = [false; 3];
    for seed in 0..200 {
        seen[sim(seed).users().len()] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn users_draw_from_pools() {
    for seed in 0..50 {
        let mut sim = sim(seed);
        for _ in 0..20 {
            sim.step(2_000.0);
        }
        for u in sim.users() {
            assert!(NAMES.contains(&u.name.as_str()));
            assert!(COLORS.contains(&u.avatar_color.as_str()));
            assert!(!u.id.is_empty());
        }
    }
}

#[test]
fn population_never_exceeds_cap() {
    for seed in 0..50 {
        let mut sim = sim(seed);
        for tick in 0..500 {
            sim.step(f64::from(tick));
            assert!(sim.users().len() <= MAX_USERS, "seed {seed} tick {tick}");
        }
    }
}

#[test]
fn step_reports_membership_changes() {
    let mut sim = sim(3);
    for _ in 0..100 {
        let before = sim.users().len();
        let outcome = sim.step(0.0);
        let joined = usize::from(outcome.joined.is_some());
        let left = usize::from(outcome.left.is_some());
        assert_eq!(sim.users().len() + left, before + joined);
    }
}

#[test]
fn outcome_changed_tracks_membership() {
    assert!(!TickOutcome::default().changed());
    assert!(TickOutcome { joined: Some("Emma".to_owned()), left: None }.changed());
    assert!(TickOutcome { joined: None, left: Some("Noah".to_owned()) }.changed());
}

#[test]
fn unchanged_step_leaves_users_untouched() {
    for seed in 0..50 {
        let mut sim = sim(seed);
        for _ in 0..50 {
            let before = sim.users().to_vec();
            if !sim.step(5_000.0).changed() {
                assert_eq!(sim.users(), before.as_slice(), "seed {seed}");
            }
        }
    }
}

#[test]
fn intervals_stay_between_fifteen_and_thirty_seconds() {
    let mut sim = sim(9);
    for _ in 0..200 {
        let d = sim.next_interval();
        assert!(d >= MIN_TICK && d <= MAX_TICK, "{d:?}");
    }
}

#[test]
fn same_seed_replays_same_room() {
    let mut a = sim(11);
    let mut b = sim(11);
    for _ in 0..30 {
        assert_eq!(a.step(0.0), b.step(0.0));
    }
    assert_eq!(a.users(), b.users());
}

// =============================================================
// Summary
// =============================================================

#[test]
fn empty_room_hides_indicator() {
    assert_eq!(summarize(&[]), None);
}

#[test]
fn single_user_label_names_them() {
    let summary = summarize(&[user("Emma")]).expect("summary");
    assert_eq!(summary.label, "Emma is viewing");
    assert_eq!(summary.avatars, vec![("E".to_owned(), COLORS[0].to_owned())]);
    assert_eq!(summary.overflow, 0);
}

#[test]
fn many_users_show_three_avatars_and_overflow() {
    let users: Vec<_> = ["Emma", "Noah", "Ava", "Mia", "Liam"].into_iter().map(user).collect();
    let summary = summarize(&users).expect("summary");
    assert_eq!(summary.label, "5 people are viewing");
    assert_eq!(summary.avatars.len(), 3);
    assert_eq!(summary.overflow, 2);
}
