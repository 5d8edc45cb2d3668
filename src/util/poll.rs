//! Cancellable interval tasks tied to component lifetimes.
//!
//! DESIGN
//! ======
//! An interval is a `spawn_local` loop that sleeps, checks a shared liveness
//! flag, then ticks. Dropping or cancelling the [`IntervalHandle`] clears the
//! flag, so the loop exits at its next wake-up without running another tick.
//! A [`TimerSlot`] holds at most one handle; installing a new one cancels the
//! previous handle first, so effect re-runs never stack timers.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Owner of a running interval. Cancels on drop.
#[derive(Debug)]
pub struct IntervalHandle {
    alive: Arc<AtomicBool>,
}

impl IntervalHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the interval; the pending sleep finishes without ticking.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `tick` every `period` until the returned handle is cancelled or dropped.
///
/// The first tick happens after one full period. Outside the browser build no
/// task is spawned and the handle only tracks liveness.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn spawn_interval<F>(period: Duration, tick: F) -> IntervalHandle
where
    F: Fn() + 'static,
{
    let handle = IntervalHandle::new();
    #[cfg(feature = "csr")]
    {
        let alive = handle.alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
    }
    handle
}

/// Single-occupancy holder for an interval handle.
#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    current: Arc<Mutex<Option<IntervalHandle>>>,
}

impl TimerSlot {
    /// Install `next`, cancelling whatever interval was there before.
    pub fn replace(&self, next: Option<IntervalHandle>) {
        if let Ok(mut slot) = self.current.lock() {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            *slot = next;
        }
    }

    /// Cancel and drop the current interval, if any.
    pub fn clear(&self) {
        self.replace(None);
    }

    pub fn is_running(&self) -> bool {
        match self.current.lock() {
            Ok(slot) => slot.as_ref().is_some_and(IntervalHandle::is_active),
            Err(_) => false,
        }
    }
}
