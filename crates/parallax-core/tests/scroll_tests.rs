// Host-side tests for scroll state and listener registration.

use parallax_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn offset_normalization() {
    let unbounded = ScrollOffset::unbounded();
    assert_eq!(unbounded.normalize(120.0), 120.0);
    assert_eq!(unbounded.normalize(-15.0), 0.0);
    assert_eq!(unbounded.normalize(f64::NAN), 0.0);
    assert_eq!(unbounded.normalize(f64::INFINITY), 0.0);

    let bounded = ScrollOffset::bounded(ScrollOffset::max_for(3000.0, 800.0));
    assert_eq!(bounded.max_offset, Some(2200.0));
    assert_eq!(bounded.normalize(5000.0), 2200.0);
    assert_eq!(bounded.normalize(1000.0), 1000.0);
}

#[test]
fn max_offset_never_negative() {
    assert_eq!(ScrollOffset::max_for(500.0, 800.0), 0.0);
    assert_eq!(ScrollOffset::max_for(f64::NAN, 800.0), 0.0);
}

#[test]
fn state_is_last_write_wins() {
    let state = ScrollState::default();
    assert!(state.record(10.0));
    assert!(state.record(500.0));
    assert!(state.record(42.0));
    assert_eq!(state.offset(), 42.0);
    assert!(!state.record(42.0));
}

#[test]
fn state_clones_share_the_offset() {
    let a = ScrollState::default();
    let b = a.clone();
    a.record(75.0);
    assert_eq!(b.offset(), 75.0);
}

#[test]
fn narrowing_bounds_clamps_stored_offset() {
    let mut state = ScrollState::new(ScrollOffset::unbounded());
    state.record(900.0);
    state.set_bounds(ScrollOffset::bounded(400.0));
    assert_eq!(state.offset(), 400.0);
}

#[test]
fn bus_notifies_live_listeners() {
    let bus = ScrollBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    let _sub = bus.subscribe(Box::new(move |y| seen_cb.borrow_mut().push(y)));

    assert_eq!(bus.emit(10.0), 1);
    assert_eq!(bus.emit(20.0), 1);
    assert_eq!(*seen.borrow(), vec![10.0, 20.0]);
    assert_eq!(bus.current_offset(), 20.0);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let bus = ScrollBus::new();
    let calls = Rc::new(Cell::new(0));
    let calls_cb = calls.clone();
    let sub = bus.subscribe(Box::new(move |_| calls_cb.set(calls_cb.get() + 1)));
    assert!(sub.is_active());
    bus.emit(1.0);
    drop(sub);

    assert_eq!(bus.listener_count(), 0);
    assert_eq!(bus.emit(2.0), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn subscribe_and_unsubscribe_are_symmetric() {
    let bus = ScrollBus::new();
    for _ in 0..5 {
        let subs: Vec<_> = (0..3).map(|_| bus.subscribe(Box::new(|_| {}))).collect();
        assert_eq!(bus.listener_count(), 3);
        drop(subs);
        assert_eq!(bus.listener_count(), 0);
    }
}

#[test]
fn listener_may_drop_another_subscription_mid_emit() {
    let bus = ScrollBus::new();
    let victim_calls = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot_cb = slot.clone();
    let _killer = bus.subscribe(Box::new(move |_| {
        slot_cb.borrow_mut().take();
    }));
    let victim_cb = victim_calls.clone();
    *slot.borrow_mut() = Some(bus.subscribe(Box::new(move |_| {
        victim_cb.set(victim_cb.get() + 1)
    })));

    assert_eq!(bus.emit(5.0), 1);
    assert_eq!(victim_calls.get(), 0);
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn subscription_outliving_bus_is_harmless() {
    let bus = ScrollBus::new();
    let sub = bus.subscribe(Box::new(|_| {}));
    drop(bus);
    assert!(!sub.is_active());
    drop(sub);
}

#[test]
fn bus_reports_normalized_offsets() {
    let bus = ScrollBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = seen.clone();
    let _sub = bus.subscribe(Box::new(move |y| seen_cb.borrow_mut().push(y)));

    bus.emit(-40.0);
    assert_eq!(bus.current_offset(), 0.0);
    bus.emit(f64::NAN);
    assert_eq!(bus.current_offset(), 0.0);
    bus.emit(15.0);
    assert_eq!(bus.current_offset(), 15.0);
    assert_eq!(*seen.borrow(), vec![0.0, 0.0, 15.0]);
}
