//! Error types for the session timer library.

use thiserror::Error;

/// Errors that can occur when using the session timer.
///
/// Construction-time validation is the only fallible entry point; the
/// engine operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A configured duration is out of range.
    #[error("無効な設定です: {0}")]
    InvalidConfiguration(String),
}
