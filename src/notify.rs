//! End-of-session notification delivery.
//!
//! The engine calls [`Notifier::notify_session_ended`] fire-and-forget
//! when a countdown reaches zero. Delivery problems are the notifier's
//! own concern and are never surfaced back into the engine.

use std::sync::{Mutex, PoisonError};

use crate::types::SessionKind;

// ============================================================================
// Notifier
// ============================================================================

/// Receives end-of-session events from the timer engine.
pub trait Notifier: Send + Sync {
    /// Called when the session of `ended` kind has finished.
    fn notify_session_ended(&self, ended: SessionKind);
}

/// Returns the user-facing title for an end-of-session notification.
pub fn notification_title(ended: SessionKind) -> &'static str {
    match ended {
        SessionKind::Work => "作業セッション終了",
        SessionKind::Break => "休憩セッション終了",
    }
}

/// Returns the user-facing body for an end-of-session notification.
pub fn notification_body(ended: SessionKind) -> &'static str {
    match ended {
        SessionKind::Work => "休憩しましょう！",
        SessionKind::Break => "作業に戻りましょう！",
    }
}

// ============================================================================
// TerminalNotifier
// ============================================================================

/// Prints the end-of-session message to the terminal and rings the bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Creates a terminal notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn notify_session_ended(&self, ended: SessionKind) {
        // BEL, the terminal's native notification sound
        println!("\x07{}: {}", notification_title(ended), notification_body(ended));
    }
}

// ============================================================================
// LogNotifier
// ============================================================================

/// Logs end-of-session events without any terminal output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_session_ended(&self, ended: SessionKind) {
        tracing::info!(ended = ended.as_str(), "session ended");
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Mock notifier that records every call, for tests.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notified: Mutex<Vec<SessionKind>>,
}

impl MockNotifier {
    /// Creates a mock with no recorded notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ended kinds in the order they were delivered.
    pub fn notified(&self) -> Vec<SessionKind> {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of notifications delivered so far.
    pub fn count(&self) -> usize {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Notifier for MockNotifier {
    fn notify_session_ended(&self, ended: SessionKind) {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ended);
    }
}

// ============================================================================
// Tests
// ============================================================================
