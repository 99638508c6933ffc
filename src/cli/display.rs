//! Display utilities for the session timer CLI.
//!
//! This module provides formatted output for:
//! - MM:SS countdown rendering
//! - The live status line with progress bar
//! - Error messages

use crate::types::{SessionKind, SessionSnapshot};

/// Width of the progress bar in the status line.
const PROGRESS_BAR_WIDTH: usize = 20;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Returns the user-facing label for a session kind.
    pub fn session_label(kind: SessionKind) -> &'static str {
        match kind {
            SessionKind::Work => "作業セッション",
            SessionKind::Break => "休憩セッション",
        }
    }

    /// Formats remaining seconds as `MM:SS`, both fields zero-padded.
    pub fn format_time(total_seconds: u32) -> String {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Renders the one-line live status for the countdown.
    pub fn render_status_line(snapshot: &SessionSnapshot) -> String {
        let marker = if snapshot.running { ">" } else { "||" };
        format!(
            "{} {} {} [{}] {:3.0}%",
            marker,
            Self::session_label(snapshot.kind),
            Self::format_time(snapshot.remaining_seconds),
            Self::progress_bar(snapshot.progress),
            snapshot.progress * 100.0
        )
    }

    /// Renders the elapsed fraction as a fixed-width bar.
    fn progress_bar(progress: f64) -> String {
        let filled = (progress * PROGRESS_BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(PROGRESS_BAR_WIDTH);
        format!(
            "{}{}",
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled)
        )
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================
