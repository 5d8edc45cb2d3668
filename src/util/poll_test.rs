use std::time::Duration;

use super::*;

// =============================================================
// IntervalHandle
// =============================================================

#[test]
fn fresh_handle_is_active() {
    let handle = spawn_interval(Duration::from_secs(1), || {});
    assert!(handle.is_active());
}

#[test]
fn cancel_deactivates_handle() {
    let handle = spawn_interval(Duration::from_secs(1), || {});
    handle.cancel();
    assert!(!handle.is_active());
}

#[test]
fn dropping_handle_clears_shared_flag() {
    let handle = spawn_interval(Duration::from_secs(1), || {});
    let flag = handle.alive.clone();
    drop(handle);
    assert!(!flag.load(Ordering::Relaxed));
}

// =============================================================
// TimerSlot
// =============================================================

#[test]
fn empty_slot_is_not_running() {
    assert!(!TimerSlot::default().is_running());
}

#[test]
fn replace_cancels_previous_interval() {
    let slot = TimerSlot::default();
    let first = spawn_interval(Duration::from_secs(1), || {});
    let first_flag = first.alive.clone();
    slot.replace(Some(first));
    assert!(slot.is_running());

    slot.replace(Some(spawn_interval(Duration::from_secs(1), || {})));
    assert!(!first_flag.load(Ordering::Relaxed));
    assert!(slot.is_running());
}

#[test]
fn clear_stops_interval() {
    let slot = TimerSlot::default();
    let handle = spawn_interval(Duration::from_secs(1), || {});
    let flag = handle.alive.clone();
    slot.replace(Some(handle));
    slot.clear();
    assert!(!slot.is_running());
    assert!(!flag.load(Ordering::Relaxed));
}

#[test]
fn clones_share_the_same_slot() {
    let slot = TimerSlot::default();
    let other = slot.clone();
    other.replace(Some(spawn_interval(Duration::from_secs(1), || {})));
    assert!(slot.is_running());
}
