//! CLI module for the session timer.
//!
//! Contains command definitions and display utilities.

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
