use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::timer::ManualScheduler;

/// Records every hook invocation as `show:<msg>`, `clear` or `cue:<msg>`.
fn recording_display(scheduler: &ManualScheduler) -> (MessageDisplay<ManualScheduler>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let change_log = Rc::clone(&log);
    let cue_log = Rc::clone(&log);
    let display = MessageDisplay::new(scheduler.clone())
        .on_change(move |message| {
            let entry = message.map_or_else(|| "clear".to_owned(), |m| format!("show:{m}"));
            change_log.borrow_mut().push(entry);
        })
        .on_activate(move |message| cue_log.borrow_mut().push(format!("cue:{message}")));
    (display, log)
}

fn shown(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|entry| entry.strip_prefix("show:").map(str::to_owned))
        .collect()
}

#[test]
fn zero_enqueues_stay_idle() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);
    scheduler.advance_ms(60_000);
    assert_eq!(display.phase(), Phase::Idle);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.armed(), 0);
}

#[test]
fn first_message_shows_immediately_with_cue() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);

    display.enqueue("hi");

    assert_eq!(display.active().as_deref(), Some("hi"));
    assert_eq!(*log.borrow(), vec!["show:hi", "cue:hi"]);
    assert!(display.has_armed_timer());
}

#[test]
fn short_message_dismisses_at_three_seconds() {
    let scheduler = ManualScheduler::new();
    let (display, _log) = recording_display(&scheduler);

    display.enqueue("hi");
    scheduler.advance_ms(2999);
    assert_eq!(display.phase(), Phase::Showing);
    scheduler.advance_ms(1);
    assert_eq!(display.phase(), Phase::Idle);
    assert!(!display.has_armed_timer());
}

#[test]
fn hundred_char_message_dismisses_at_five_seconds() {
    let scheduler = ManualScheduler::new();
    let (display, _log) = recording_display(&scheduler);

    display.enqueue("m".repeat(100));
    scheduler.advance_ms(4999);
    assert_eq!(display.phase(), Phase::Showing);
    scheduler.advance_ms(1);
    assert_eq!(display.phase(), Phase::Idle);
}

#[test]
fn messages_display_in_arrival_order() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);

    display.enqueue("A");
    display.enqueue("B");
    display.enqueue("C");
    assert_eq!(display.pending_len(), 2);
    assert_eq!(shown(&log), vec!["A"]);

    scheduler.advance_ms(3000);
    assert_eq!(display.active().as_deref(), Some("B"));
    scheduler.advance_ms(3000);
    assert_eq!(display.active().as_deref(), Some("C"));
    scheduler.advance_ms(3000);

    assert_eq!(shown(&log), vec!["A", "B", "C"]);
    assert_eq!(display.phase(), Phase::Idle);
}

#[test]
fn every_activation_plays_a_cue() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);

    display.enqueue("A");
    display.enqueue("B");
    scheduler.advance_ms(6000);

    let cues: Vec<_> = log.borrow().iter().filter(|e| e.starts_with("cue:")).cloned().collect();
    assert_eq!(cues, vec!["cue:A", "cue:B"]);
}

#[test]
fn greeting_then_tip_scenario() {
    let scheduler = ManualScheduler::new();
    let (display, _log) = recording_display(&scheduler);
    let greeting = "Good morning, Designer!";
    let tip = "Try exploring the projects section to see the evolution.";
    assert!(tip.chars().count() <= 60);

    display.enqueue(greeting);
    display.enqueue(tip);
    assert_eq!(display.active().as_deref(), Some(greeting));

    scheduler.advance_ms(3000);
    assert_eq!(display.active().as_deref(), Some(tip));
    assert_eq!(scheduler.now().as_millis(), 3000);

    scheduler.advance_ms(2999);
    assert_eq!(display.active().as_deref(), Some(tip));
    scheduler.advance_ms(1);
    assert_eq!(display.phase(), Phase::Idle);
}

#[test]
fn teardown_while_showing_stops_all_transitions() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);

    display.enqueue("A");
    display.enqueue("B");
    let before = log.borrow().len();

    display.teardown();
    assert_eq!(scheduler.armed(), 0);

    scheduler.advance_ms(60_000);
    assert_eq!(log.borrow().len(), before);
    assert_eq!(display.phase(), Phase::Idle);
    assert_eq!(display.pending_len(), 0);
}

#[test]
fn teardown_from_dismissal_hook_arms_no_timer() {
    let scheduler = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let slot: Rc<RefCell<Option<MessageDisplay<ManualScheduler>>>> = Rc::new(RefCell::new(None));

    let l = Rc::clone(&log);
    let s = Rc::clone(&slot);
    let display = MessageDisplay::new(scheduler.clone()).on_change(move |message| {
        l.borrow_mut().push(message.map(str::to_owned));
        if message.is_none() {
            let owner = s.borrow_mut().take();
            if let Some(display) = owner {
                display.teardown();
            }
        }
    });
    *slot.borrow_mut() = Some(display.clone());

    display.enqueue("A");
    display.enqueue("B");
    scheduler.advance_ms(3000);

    assert_eq!(scheduler.armed(), 0);
    assert!(!display.has_armed_timer());
    assert_eq!(display.phase(), Phase::Idle);
    assert_eq!(display.active(), None);
    assert_eq!(*log.borrow(), vec![Some("A".to_owned()), None]);
}

#[test]
fn enqueue_after_teardown_is_ignored() {
    let scheduler = ManualScheduler::new();
    let (display, log) = recording_display(&scheduler);

    display.teardown();
    display.enqueue("late");

    assert_eq!(display.phase(), Phase::Idle);
    assert!(log.borrow().is_empty());
    assert_eq!(scheduler.armed(), 0);
}

#[test]
fn dropping_every_display_handle_silences_armed_timer() {
    let scheduler = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = Rc::clone(&log);
    let display = MessageDisplay::new(scheduler.clone()).on_change(move |m| l.borrow_mut().push(m.map(str::to_owned)));

    display.enqueue("A");
    drop(display);
    scheduler.advance_ms(10_000);

    assert_eq!(*log.borrow(), vec![Some("A".to_owned())]);
}

#[test]
fn enqueue_from_dismissal_hook_is_safe() {
    let scheduler = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let slot: Rc<RefCell<Option<MessageDisplay<ManualScheduler>>>> = Rc::new(RefCell::new(None));

    let l = Rc::clone(&log);
    let s = Rc::clone(&slot);
    let display = MessageDisplay::new(scheduler.clone()).on_change(move |message| {
        l.borrow_mut().push(message.map(str::to_owned));
        if message.is_none() {
            let follow_up = s.borrow().clone();
            if let Some(display) = follow_up {
                if display.pending_len() == 0 && l.borrow().len() < 4 {
                    display.enqueue("follow-up");
                }
            }
        }
    });
    *slot.borrow_mut() = Some(display.clone());

    display.enqueue("first");
    scheduler.advance_ms(3000);
    assert_eq!(display.active().as_deref(), Some("follow-up"));
    assert!(display.has_armed_timer());

    scheduler.advance_ms(3000);
    assert_eq!(display.phase(), Phase::Idle);
    assert_eq!(
        *log.borrow(),
        vec![Some("first".to_owned()), None, Some("follow-up".to_owned()), None]
    );

    slot.borrow_mut().take();
}

#[test]
fn enqueue_from_activation_hook_queues_behind_current() {
    let scheduler = ManualScheduler::new();
    let slot: Rc<RefCell<Option<MessageDisplay<ManualScheduler>>>> = Rc::new(RefCell::new(None));
    let s = Rc::clone(&slot);
    let display = MessageDisplay::new(scheduler.clone()).on_activate(move |message| {
        if message == "ping" {
            let display = s.borrow().clone();
            if let Some(display) = display {
                display.enqueue("pong");
            }
        }
    });
    *slot.borrow_mut() = Some(display.clone());

    display.enqueue("ping");
    assert_eq!(display.active().as_deref(), Some("ping"));
    assert_eq!(display.pending_len(), 1);

    scheduler.advance_ms(3000);
    assert_eq!(display.active().as_deref(), Some("pong"));

    slot.borrow_mut().take();
}
