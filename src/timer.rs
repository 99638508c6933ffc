//! Session timer engine.
//!
//! This module provides the core countdown functionality:
//! - Start/pause toggle, reset, and per-second ticks
//! - Automatic work/break alternation when a countdown reaches zero
//! - Notifier callout on session end
//! - Scoped clock subscription, cancelled deterministically on teardown

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::Duration;

use crate::clock::{Clock, ClockSubscription};
use crate::notify::Notifier;
use crate::types::{SessionConfig, SessionSnapshot, SessionState};

/// Interval between countdown ticks.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// SessionTimer
// ============================================================================

/// Timer engine that alternates work and break sessions.
///
/// The engine subscribes to its [`Clock`] while running and drops the
/// subscription when paused or dropped, so no tick callback can outlive
/// it. Control operations are expected to be serialized on one thread;
/// the internal mutex only shields the state from the clock task.
///
/// `start()` has toggle semantics: calling it while running pauses
/// instead. This mirrors the single start/pause control the timer was
/// designed around.
pub struct SessionTimer {
    shared: Arc<Mutex<SessionState>>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    subscription: Option<ClockSubscription>,
}

impl SessionTimer {
    /// Creates a stopped timer: work session at full duration.
    pub fn new(config: SessionConfig, clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(SessionState::new(config))),
            clock,
            notifier,
            subscription: None,
        }
    }

    /// Starts the countdown, or pauses it if it is already running.
    pub fn start(&mut self) {
        let started = {
            let mut state = lock(&self.shared);
            if state.running {
                state.running = false;
                false
            } else {
                state.running = true;
                true
            }
        };

        if started {
            tracing::debug!("timer started");
            self.subscribe();
        } else {
            tracing::debug!("timer paused (start toggled while running)");
            self.subscription = None;
        }
    }

    /// Pauses the countdown. Idempotent.
    pub fn pause(&mut self) {
        lock(&self.shared).running = false;
        self.subscription = None;
        tracing::debug!("timer paused");
    }

    /// Pauses, then restores the full duration for the current session
    /// kind. The kind itself is unchanged.
    pub fn reset(&mut self) {
        lock(&self.shared).reset();
        self.subscription = None;
        tracing::debug!("timer reset");
    }

    /// Returns a coherent snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.shared).snapshot()
    }

    /// Returns true if the countdown is running.
    pub fn is_running(&self) -> bool {
        lock(&self.shared).running
    }

    /// Subscribes to the clock at the tick interval.
    fn subscribe(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let shared = Arc::clone(&self.shared);
        let notifier = Arc::clone(&self.notifier);
        let callback = Box::new(move || {
            // Notify outside the lock: the notifier is fire-and-forget
            // and must not block state access.
            let ended = {
                let mut state = lock(&shared);
                // A tick already in flight when the timer was paused is
                // dropped here.
                if !state.running {
                    return;
                }
                state.tick()
            };

            if let Some(kind) = ended {
                tracing::info!(ended = kind.as_str(), "session completed, switching");
                notifier.notify_session_ended(kind);
            }
        });

        self.subscription = Some(self.clock.subscribe(TICK_INTERVAL, callback));
    }
}

/// Locks the shared state, recovering the guard if a panicking holder
/// poisoned the mutex.
fn lock(shared: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Tests
// ============================================================================
