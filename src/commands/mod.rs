//! Command implementations for the chain-loop CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Check chains for loops and report where each one begins
//! - spectacle: Draw a single chain with its loop highlighted

pub mod inspect;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
