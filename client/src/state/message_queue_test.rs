use super::*;

fn activated(result: Enqueued) -> Activation {
    match result {
        Enqueued::Activated(activation) => activation,
        Enqueued::Queued { position } => panic!("expected activation, got queued at {position}"),
    }
}

// =============================================================
// display_duration
// =============================================================

#[test]
fn short_message_uses_floor() {
    assert_eq!(display_duration("hi"), Duration::from_millis(3000));
    assert_eq!(display_duration(""), Duration::from_millis(3000));
}

#[test]
fn hundred_chars_shows_for_five_seconds() {
    let message = "x".repeat(100);
    assert_eq!(display_duration(&message), Duration::from_millis(5000));
}

#[test]
fn floor_holds_until_sixty_one_chars() {
    assert_eq!(display_duration(&"a".repeat(60)), Duration::from_millis(3000));
    assert_eq!(display_duration(&"a".repeat(61)), Duration::from_millis(3050));
}

#[test]
fn duration_counts_characters_not_bytes() {
    let message = "é".repeat(80);
    assert_eq!(display_duration(&message), Duration::from_millis(4000));
}

#[test]
fn astral_emoji_counts_as_one_character() {
    let message = "😊".repeat(70);
    assert_eq!(message.encode_utf16().count(), 140);
    assert_eq!(display_duration(&message), Duration::from_millis(3500));
}

// =============================================================
// enqueue
// =============================================================

#[test]
fn new_queue_is_idle() {
    let queue = MessageQueue::new();
    assert_eq!(queue.phase(), Phase::Idle);
    assert_eq!(queue.active(), None);
    assert_eq!(queue.pending_len(), 0);
}

#[test]
fn first_enqueue_activates_immediately() {
    let mut queue = MessageQueue::new();
    let activation = activated(queue.enqueue("hello".to_owned()));
    assert_eq!(activation.message, "hello");
    assert_eq!(queue.phase(), Phase::Showing);
    assert_eq!(queue.active(), Some("hello"));
}

#[test]
fn enqueue_while_showing_appends_instead_of_preempting() {
    let mut queue = MessageQueue::new();
    activated(queue.enqueue("A".to_owned()));
    assert_eq!(queue.enqueue("B".to_owned()), Enqueued::Queued { position: 0 });
    assert_eq!(queue.enqueue("C".to_owned()), Enqueued::Queued { position: 1 });
    assert_eq!(queue.active(), Some("A"));
    assert_eq!(queue.pending().collect::<Vec<_>>(), vec!["B", "C"]);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_preserves_arrival_order() {
    let mut queue = MessageQueue::new();
    let mut shown = Vec::new();
    let first = activated(queue.enqueue("A".to_owned()));
    queue.enqueue("B".to_owned());
    queue.enqueue("C".to_owned());
    shown.push(first.message.clone());

    let mut ticket = first.ticket;
    loop {
        match queue.dismiss(ticket) {
            Dismissal::Next(next) => {
                shown.push(next.message.clone());
                ticket = next.ticket;
            }
            Dismissal::Idle => break,
            Dismissal::Stale => panic!("live ticket reported stale"),
        }
    }

    assert_eq!(shown, vec!["A", "B", "C"]);
    assert_eq!(queue.phase(), Phase::Idle);
}

#[test]
fn dismiss_with_empty_backlog_returns_to_idle() {
    let mut queue = MessageQueue::new();
    let activation = activated(queue.enqueue("only".to_owned()));
    assert_eq!(queue.dismiss(activation.ticket), Dismissal::Idle);
    assert_eq!(queue.phase(), Phase::Idle);
}

#[test]
fn dismiss_with_old_ticket_is_stale() {
    let mut queue = MessageQueue::new();
    let first = activated(queue.enqueue("A".to_owned()));
    queue.enqueue("B".to_owned());
    let Dismissal::Next(second) = queue.dismiss(first.ticket) else {
        panic!("expected next activation");
    };

    assert_eq!(queue.dismiss(first.ticket), Dismissal::Stale);
    assert_eq!(queue.active(), Some("B"));
    assert_eq!(queue.dismiss(second.ticket), Dismissal::Idle);
}

#[test]
fn dismiss_when_idle_is_stale() {
    let mut queue = MessageQueue::new();
    let activation = activated(queue.enqueue("A".to_owned()));
    queue.dismiss(activation.ticket);
    assert_eq!(queue.dismiss(activation.ticket), Dismissal::Stale);
}

#[test]
fn next_activation_carries_its_own_duration() {
    let mut queue = MessageQueue::new();
    let first = activated(queue.enqueue("short".to_owned()));
    queue.enqueue("y".repeat(100));
    let Dismissal::Next(next) = queue.dismiss(first.ticket) else {
        panic!("expected next activation");
    };
    assert_eq!(first.duration, Duration::from_millis(3000));
    assert_eq!(next.duration, Duration::from_millis(5000));
}

// =============================================================
// teardown
// =============================================================

#[test]
fn teardown_clears_everything_and_stales_tickets() {
    let mut queue = MessageQueue::new();
    let activation = activated(queue.enqueue("A".to_owned()));
    queue.enqueue("B".to_owned());

    queue.teardown();

    assert_eq!(queue.phase(), Phase::Idle);
    assert_eq!(queue.pending_len(), 0);
    assert_eq!(queue.dismiss(activation.ticket), Dismissal::Stale);
    assert_eq!(queue.phase(), Phase::Idle);
}

#[test]
fn tickets_are_unique_across_activations() {
    let mut queue = MessageQueue::new();
    let first = activated(queue.enqueue("A".to_owned()));
    queue.dismiss(first.ticket);
    let second = activated(queue.enqueue("A".to_owned()));
    assert_ne!(first.ticket, second.ticket);
}
