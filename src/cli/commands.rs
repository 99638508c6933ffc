//! Command definitions for the session timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::error::TimerError;
use crate::types::SessionConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Session timer CLI - alternating work/break countdown in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "focuscycle",
    version,
    about = "作業/休憩セッションを自動で交互に繰り返すカウントダウンタイマー",
    long_about = "ターミナル上で動作するシンプルなセッションタイマー。\n\
                  作業セッションが終わると休憩セッションが自動的に始まります。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the timer in the foreground
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Work duration in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: u32,

    /// Break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub break_time: u32,

    /// Interpret durations as seconds instead of minutes
    #[arg(long)]
    pub seconds: bool,

    /// Disable the terminal bell on session end
    #[arg(long)]
    pub no_bell: bool,

    /// Emit one JSON snapshot per state change instead of a status line
    #[arg(long)]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            work: 25,
            break_time: 5,
            seconds: false,
            no_bell: false,
            json: false,
        }
    }
}

impl RunArgs {
    /// Builds a validated session configuration from the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidConfiguration`] if a duration
    /// resolves to zero seconds.
    pub fn to_config(&self) -> Result<SessionConfig, TimerError> {
        let scale = if self.seconds { 1 } else { 60 };
        SessionConfig::new(self.work * scale, self.break_time * scale)
    }
}

// ============================================================================
// Tests
// ============================================================================
