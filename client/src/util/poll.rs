//! Repeating timers bound to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that simulate live data (authority queue, analytics, map
//! auto-refresh, uptime counters) run a `spawn_local` loop that sleeps between
//! ticks. Each loop shares a `PollGuard` with an `on_cleanup` hook registered
//! in the owning reactive scope; teardown clears the guard and the loop exits
//! at its next wake-up without running another tick.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::on_cleanup;

/// Liveness flag shared between a polling loop and its owner.
#[derive(Clone, Debug)]
pub struct PollGuard {
    alive: Arc<AtomicBool>,
}

impl Default for PollGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PollGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the loop. Idempotent.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Run `tick` every `period` until the current reactive owner is cleaned up.
///
/// The first tick happens after one full period; callers that want an
/// immediate fetch do it themselves before calling this. Outside the browser
/// no loop is spawned, but the guard is still tied to the owner.
pub fn poll_every<F, Fut>(period: Duration, tick: F) -> PollGuard
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let guard = PollGuard::new();

    #[cfg(feature = "hydrate")]
    {
        let task_guard = guard.clone();
        leptos::task::spawn_local(async move {
            while task_guard.is_alive() {
                gloo_timers::future::sleep(period).await;
                if !task_guard.is_alive() {
                    break;
                }
                tick().await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, tick);
    }

    let cleanup_guard = guard.clone();
    on_cleanup(move || cleanup_guard.stop());
    guard
}
