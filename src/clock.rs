//! Tick sources for the session timer.
//!
//! The engine never schedules time itself; it subscribes to a [`Clock`]
//! and receives periodic callbacks. Subscriptions are scoped: dropping
//! the [`ClockSubscription`] cancels delivery deterministically, so no
//! callback can fire against a torn-down engine.
//!
//! Two implementations are provided:
//! - [`TokioClock`]: production clock backed by `tokio::time::interval`
//! - [`ManualClock`]: deterministic clock for tests, advanced by hand

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::time::{interval, Duration, MissedTickBehavior};

/// Callback invoked once per clock interval.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

// ============================================================================
// Clock
// ============================================================================

/// A source of periodic ticks.
pub trait Clock: Send + Sync {
    /// Starts delivering ticks to `callback` every `interval` until the
    /// returned subscription is cancelled or dropped.
    fn subscribe(&self, interval: Duration, callback: TickCallback) -> ClockSubscription;
}

// ============================================================================
// ClockSubscription
// ============================================================================

/// Handle for an active tick subscription.
///
/// Cancellation happens on drop, so holding the handle scopes the
/// subscription to its owner's lifetime.
pub struct ClockSubscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ClockSubscription {
    /// Creates a subscription handle from a cancel action.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the subscription explicitly.
    ///
    /// Equivalent to dropping the handle.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ClockSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ClockSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// TokioClock
// ============================================================================

/// Production clock backed by the tokio runtime.
///
/// Each subscription spawns a task around `tokio::time::interval`.
/// Missed ticks are skipped rather than bursted, matching wall-clock
/// countdown behavior. Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn subscribe(&self, period: Duration, mut callback: TickCallback) -> ClockSubscription {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of tokio's interval completes immediately;
            // consume it so callbacks are spaced a full period apart.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                callback();
            }
        });

        ClockSubscription::new(move || handle.abort())
    }
}

// ============================================================================
// ManualClock
// ============================================================================

/// Deterministic clock for tests.
///
/// Ticks are delivered synchronously from [`ManualClock::advance`],
/// so tests control time exactly and never sleep.
#[derive(Default)]
pub struct ManualClock {
    subscribers: Arc<Mutex<HashMap<u64, TickCallback>>>,
    next_id: AtomicU64,
}

impl ManualClock {
    /// Creates a clock with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `ticks` ticks to every active subscriber.
    pub fn advance(&self, ticks: u32) {
        for _ in 0..ticks {
            let mut subscribers = lock(&self.subscribers);
            for callback in subscribers.values_mut() {
                callback();
            }
        }
    }

    /// Returns the number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }
}

impl Clock for ManualClock {
    fn subscribe(&self, _interval: Duration, callback: TickCallback) -> ClockSubscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.subscribers).insert(id, callback);

        let subscribers = Arc::clone(&self.subscribers);
        ClockSubscription::new(move || {
            lock(&subscribers).remove(&id);
        })
    }
}

/// Locks a mutex, recovering the guard if a panicking holder poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Tests
// ============================================================================
