//! Configuration constants for chain-loop
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames: a cursor running around a loop
    pub const SPINNER_FRAMES: &[&str] = &["◜", "◝", "◞", "◟", "◜", "◝", "◞", "◟"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Chain file discovery
pub mod files {
    /// Suffix identifying chain files when walking directories
    pub const CHAIN_FILE_SUFFIX: &str = ".chain.toml";

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];
}
