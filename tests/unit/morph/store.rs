use std::{cell::RefCell, rc::Rc};

use super::*;

fn recording(store: &MorphStore) -> (Rc<RefCell<Vec<MorphState>>>, MorphSubscription) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let sub = store.subscribe(move |s| sink.borrow_mut().push(s));
    (log, sub)
}

#[test]
fn subscribe_replays_the_current_snapshot() {
    let store = MorphStore::new();
    let (log, _sub) = recording(&store);
    assert_eq!(*log.borrow(), vec![MorphState::default()]);

    store.set_progress(0.4);
    let (late, _late_sub) = recording(&store);
    assert_eq!(late.borrow()[0].progress, 0.4);
}

#[test]
fn progress_is_clamped_and_nan_ignored() {
    let store = MorphStore::new();
    store.set_progress(1.5);
    assert_eq!(store.get_snapshot().progress, 1.0);
    store.set_progress(-0.2);
    assert_eq!(store.get_snapshot().progress, 0.0);
    store.set_progress(f64::NAN);
    assert_eq!(store.get_snapshot().progress, 0.0);
    store.set_progress(f64::INFINITY);
    assert_eq!(store.get_snapshot().progress, 1.0);
}

#[test]
fn unchanged_writes_do_not_notify() {
    let store = MorphStore::new();
    let (log, _sub) = recording(&store);
    store.set_progress(0.5);
    store.set_progress(0.5);
    store.set_enabled(true);
    store.set_enabled(true);
    store.set_progress(2.0);
    store.set_progress(3.0);
    assert_eq!(log.borrow().len(), 4);
    assert_eq!(
        log.borrow().last().copied(),
        Some(MorphState {
            enabled: true,
            progress: 1.0
        })
    );
}

#[test]
fn dropping_or_unsubscribing_removes_the_listener() {
    let store = MorphStore::new();
    let (a, sub_a) = recording(&store);
    let (b, sub_b) = recording(&store);
    assert_eq!(store.listener_count(), 2);

    drop(sub_a);
    sub_b.unsubscribe();
    assert_eq!(store.listener_count(), 0);

    store.set_enabled(true);
    assert_eq!(a.borrow().len(), 1);
    assert_eq!(b.borrow().len(), 1);
}

#[test]
fn handles_share_one_store() {
    let store = MorphStore::new();
    let other = store.clone();
    other.set_enabled(true);
    assert!(store.get_snapshot().enabled);

    store.reset();
    assert_eq!(other.get_snapshot(), MorphState::default());
}

#[test]
fn listeners_may_subscribe_and_write_during_notification() {
    let store = MorphStore::new();
    let spawned = Rc::new(RefCell::new(Vec::<MorphSubscription>::new()));

    let handle = store.clone();
    let keep = Rc::clone(&spawned);
    let _sub = store.subscribe(move |s| {
        if s.enabled && keep.borrow().is_empty() {
            keep.borrow_mut().push(handle.subscribe(|_| {}));
            handle.set_progress(0.25);
        }
    });

    let (late, _late_sub) = recording(&store);

    store.set_enabled(true);
    assert_eq!(store.listener_count(), 3);
    assert_eq!(store.get_snapshot().progress, 0.25);
    assert_eq!(late.borrow().last().copied(), Some(store.get_snapshot()));
}

#[test]
fn nested_writes_leave_every_listener_on_the_current_value() {
    let store = MorphStore::new();

    let handle = store.clone();
    let first_seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&first_seen);
    let _writer = store.subscribe(move |s| {
        sink.borrow_mut().push(s.progress);
        if s.progress == 0.5 {
            handle.set_progress(0.7);
        }
    });
    let (after, _after_sub) = recording(&store);

    store.set_progress(0.5);
    let current = store.get_snapshot();
    assert_eq!(current.progress, 0.7);
    assert_eq!(after.borrow().last().copied(), Some(current));
    assert_eq!(first_seen.borrow().last().copied(), Some(0.7));
    // The later listener never sees the superseded value after the newer one.
    let seen: Vec<f64> = after.borrow().iter().map(|s| s.progress).collect();
    assert_eq!(seen, vec![0.0, 0.7]);
}

#[test]
fn writes_during_the_subscribe_replay_are_redelivered() {
    let store = MorphStore::new();
    let handle = store.clone();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let _sub = store.subscribe(move |s| {
        sink.borrow_mut().push(s.progress);
        if !s.enabled {
            handle.set_enabled(true);
        }
    });
    assert!(store.get_snapshot().enabled);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn subscription_outliving_the_store_is_harmless() {
    let store = MorphStore::new();
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
}
