//! Shared terminal utilities.
//!
//! Header formatting, verdict styling, and TTY detection.

mod output;

pub use output::*;
