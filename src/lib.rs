//! Session Timer Library
//!
//! This library provides the core functionality for the focuscycle CLI.
//! It includes:
//! - A countdown engine that alternates work and break sessions
//! - Clock abstraction with a tokio-backed production implementation
//!   and a deterministic manual clock for tests
//! - Notifier abstraction for end-of-session alerts
//! - CLI command parsing and display utilities
//! - Type definitions for configuration, state, and snapshots

pub mod cli;
pub mod clock;
pub mod error;
pub mod notify;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ClockSubscription, ManualClock, TickCallback, TokioClock};
pub use error::TimerError;
pub use notify::{LogNotifier, MockNotifier, Notifier, TerminalNotifier};
pub use timer::SessionTimer;
pub use types::{SessionConfig, SessionKind, SessionSnapshot, SessionState};
