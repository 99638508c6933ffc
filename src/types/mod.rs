//! Core data types for the session timer.
//!
//! This module defines the data structures used for:
//! - Session kind (work / break alternation)
//! - Timer configuration with validation
//! - Countdown state and its transitions
//! - Read-only snapshots for display consumers

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

// ============================================================================
// SessionKind
// ============================================================================

/// The kind of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Focused work session
    Work,
    /// Break session
    Break,
}

impl SessionKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::Break => "break",
        }
    }

    /// Returns the other kind (work and break alternate).
    pub fn other(&self) -> Self {
        match self {
            SessionKind::Work => SessionKind::Break,
            SessionKind::Break => SessionKind::Work,
        }
    }
}

impl Default for SessionKind {
    fn default() -> Self {
        SessionKind::Work
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Configuration for the session timer.
///
/// Immutable for the lifetime of the engine that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Work session duration in seconds
    pub work_seconds: u32,
    /// Break session duration in seconds
    pub break_seconds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            break_seconds: 5 * 60,
        }
    }
}

impl SessionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidConfiguration`] if either duration
    /// is zero.
    pub fn new(work_seconds: u32, break_seconds: u32) -> Result<Self, TimerError> {
        if work_seconds == 0 {
            return Err(TimerError::InvalidConfiguration(
                "作業時間は1秒以上で指定してください".to_string(),
            ));
        }
        if break_seconds == 0 {
            return Err(TimerError::InvalidConfiguration(
                "休憩時間は1秒以上で指定してください".to_string(),
            ));
        }
        Ok(Self {
            work_seconds,
            break_seconds,
        })
    }

    /// Returns the configured duration for the given session kind.
    pub fn duration_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::Break => self.break_seconds,
        }
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// The countdown state of the session timer.
///
/// Invariant: `remaining_seconds` never exceeds the configured duration
/// of the current kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Kind of the current session
    pub kind: SessionKind,
    /// Remaining seconds in the current session
    pub remaining_seconds: u32,
    /// Whether the countdown is running
    pub running: bool,
    /// Timer configuration
    pub config: SessionConfig,
}

impl SessionState {
    /// Creates a new state: work session at full duration, not running.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            kind: SessionKind::Work,
            remaining_seconds: config.work_seconds,
            running: false,
            config,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// When the countdown reaches zero the session switches: the kind
    /// toggles and the remaining time reloads from the new kind's
    /// configured duration. `running` is left untouched so the next
    /// session continues without manual intervention.
    ///
    /// Returns the kind of the session that just ended, or `None` on a
    /// plain decrement.
    pub fn tick(&mut self) -> Option<SessionKind> {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            let ended = self.kind;
            self.kind = ended.other();
            self.remaining_seconds = self.config.duration_for(self.kind);
            return Some(ended);
        }
        None
    }

    /// Stops the countdown and restores the full duration for the
    /// current kind. The kind itself is unchanged.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.config.duration_for(self.kind);
    }

    /// Elapsed fraction of the current session, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.config.duration_for(self.kind));
        (1.0 - f64::from(self.remaining_seconds) / total).clamp(0.0, 1.0)
    }

    /// Returns a read-only snapshot for display consumers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            kind: self.kind,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            progress: self.progress(),
        }
    }
}

// ============================================================================
// SessionSnapshot
// ============================================================================

/// A point-in-time view of the timer for display consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Kind of the current session
    pub kind: SessionKind,
    /// Remaining seconds in the current session
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Whether the countdown is running
    pub running: bool,
    /// Elapsed fraction of the current session, in `[0, 1]`
    pub progress: f64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // SessionKind Tests
    // ------------------------------------------------------------------------

    mod session_kind_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(SessionKind::default(), SessionKind::Work);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(SessionKind::Work.as_str(), "work");
            assert_eq!(SessionKind::Break.as_str(), "break");
        }

        #[test]
        fn test_other_alternates() {
            assert_eq!(SessionKind::Work.other(), SessionKind::Break);
            assert_eq!(SessionKind::Break.other(), SessionKind::Work);
            assert_eq!(SessionKind::Work.other().other(), SessionKind::Work);
        }

        #[test]
        fn test_serialize_deserialize() {
            let json = serde_json::to_string(&SessionKind::Work).unwrap();
            assert_eq!(json, "\"work\"");

            let deserialized: SessionKind = serde_json::from_str("\"break\"").unwrap();
            assert_eq!(deserialized, SessionKind::Break);
        }
    }

    // ------------------------------------------------------------------------
    // SessionConfig Tests
    // ------------------------------------------------------------------------

    mod session_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = SessionConfig::default();
            assert_eq!(config.work_seconds, 25 * 60);
            assert_eq!(config.break_seconds, 5 * 60);
        }

        #[test]
        fn test_new_valid() {
            let config = SessionConfig::new(1500, 300).unwrap();
            assert_eq!(config.work_seconds, 1500);
            assert_eq!(config.break_seconds, 300);
        }

        #[test]
        fn test_new_minimum_values() {
            assert!(SessionConfig::new(1, 1).is_ok());
        }

        #[test]
        fn test_new_zero_work_fails() {
            let result = SessionConfig::new(0, 300);
            assert!(matches!(result, Err(TimerError::InvalidConfiguration(_))));
        }

        #[test]
        fn test_new_zero_break_fails() {
            let result = SessionConfig::new(1500, 0);
            assert!(matches!(result, Err(TimerError::InvalidConfiguration(_))));
        }

        #[test]
        fn test_duration_for() {
            let config = SessionConfig::new(90, 30).unwrap();
            assert_eq!(config.duration_for(SessionKind::Work), 90);
            assert_eq!(config.duration_for(SessionKind::Break), 30);
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = SessionConfig::new(90, 30).unwrap();
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // SessionState Tests
    // ------------------------------------------------------------------------

    mod session_state_tests {
        use super::*;

        fn state(work: u32, brk: u32) -> SessionState {
            SessionState::new(SessionConfig::new(work, brk).unwrap())
        }

        #[test]
        fn test_new_state() {
            let state = state(1500, 300);

            assert_eq!(state.kind, SessionKind::Work);
            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.running);
        }

        #[test]
        fn test_tick_decrements() {
            let mut state = state(3, 2);

            let ended = state.tick();
            assert_eq!(ended, None);
            assert_eq!(state.remaining_seconds, 2);
            assert_eq!(state.kind, SessionKind::Work);
        }

        #[test]
        fn test_tick_switches_at_zero() {
            let mut state = state(2, 5);
            state.running = true;

            assert_eq!(state.tick(), None);
            let ended = state.tick();

            assert_eq!(ended, Some(SessionKind::Work));
            assert_eq!(state.kind, SessionKind::Break);
            assert_eq!(state.remaining_seconds, 5);
            // Auto-continuation: still running after the switch
            assert!(state.running);
        }

        #[test]
        fn test_tick_full_cycle_returns_to_work() {
            let mut state = state(2, 3);
            state.running = true;

            state.tick();
            assert_eq!(state.tick(), Some(SessionKind::Work));

            state.tick();
            state.tick();
            let ended = state.tick();

            assert_eq!(ended, Some(SessionKind::Break));
            assert_eq!(state.kind, SessionKind::Work);
            assert_eq!(state.remaining_seconds, 2);
            assert!(state.running);
        }

        #[test]
        fn test_reset_restores_full_duration() {
            let mut state = state(10, 4);
            state.running = true;
            state.tick();
            state.tick();

            state.reset();

            assert_eq!(state.kind, SessionKind::Work);
            assert_eq!(state.remaining_seconds, 10);
            assert!(!state.running);
        }

        #[test]
        fn test_reset_keeps_break_kind() {
            let mut state = state(1, 4);
            state.running = true;
            state.tick(); // switch to break
            state.tick();

            state.reset();

            assert_eq!(state.kind, SessionKind::Break);
            assert_eq!(state.remaining_seconds, 4);
            assert!(!state.running);
        }

        #[test]
        fn test_progress_zero_at_full_duration() {
            let state = state(1500, 300);
            assert_eq!(state.progress(), 0.0);
        }

        #[test]
        fn test_progress_halfway() {
            let mut state = state(4, 2);
            state.tick();
            state.tick();
            assert!((state.progress() - 0.5).abs() < f64::EPSILON);
        }

        #[test]
        fn test_progress_always_in_unit_interval() {
            let mut state = state(5, 3);
            state.running = true;

            for _ in 0..20 {
                let p = state.progress();
                assert!((0.0..=1.0).contains(&p), "progress out of range: {}", p);
                state.tick();
            }
        }

        #[test]
        fn test_snapshot_reflects_state() {
            let mut state = state(10, 5);
            state.running = true;
            state.tick();

            let snapshot = state.snapshot();

            assert_eq!(snapshot.kind, SessionKind::Work);
            assert_eq!(snapshot.remaining_seconds, 9);
            assert!(snapshot.running);
            assert!((snapshot.progress - 0.1).abs() < 1e-9);
        }

        #[test]
        fn test_remaining_never_exceeds_duration() {
            let mut state = state(3, 2);
            state.running = true;

            for _ in 0..12 {
                state.tick();
                assert!(state.remaining_seconds <= state.config.duration_for(state.kind));
            }
        }
    }

    // ------------------------------------------------------------------------
    // SessionSnapshot Tests
    // ------------------------------------------------------------------------

    mod session_snapshot_tests {
        use super::*;

        #[test]
        fn test_serialize_field_names() {
            let snapshot = SessionSnapshot {
                kind: SessionKind::Work,
                remaining_seconds: 1500,
                running: true,
                progress: 0.0,
            };

            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"kind\":\"work\""));
            assert!(json.contains("\"remainingSeconds\":1500"));
            assert!(json.contains("\"running\":true"));
        }
    }
}
