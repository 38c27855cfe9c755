//! # Chain Loop - Find Where a Linked Chain Starts Repeating
//!
//! Chain Loop decides whether following successor links from the head of a
//! singly-linked chain ever terminates, and when it does not, identifies the
//! node where the repetition begins. Detection is Floyd's tortoise-and-hare
//! race: constant extra memory, linear time, and no writes to the chain.
//!
//! ## Main Components
//!
//! - **Chain**: Arena and borrowed-reference chains behind the
//!   [`chain::Successors`] trait
//! - **Detector**: Cycle detection and entry localization
//! - **Analyzer**: Discovers chain files and measures each of them in parallel
//! - **Graph**: Lays a chain out as a graph and draws it
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Detecting a Loop in Memory
//!
//! ```
//! use chain_loop::chain::Chain;
//! use chain_loop::detector::{CycleDetector, Detection};
//!
//! # fn main() -> Result<(), chain_loop::error::ChainLoopError> {
//! let mut chain = Chain::new();
//! let a = chain.push("a");
//! let b = chain.push("b");
//! let c = chain.push("c");
//! let d = chain.push("d");
//! chain.link(a, b)?;
//! chain.link(b, c)?;
//! chain.link(c, d)?;
//! chain.link(d, b)?;
//! chain.set_head(Some(a))?;
//!
//! let detection = CycleDetector::new().detect(&chain, chain.head())?;
//! assert_eq!(detection, Detection::CycleEntry(b));
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting Chain Files
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use chain_loop::analyzer::ChainAnalyzer;
//! use chain_loop::reports::{JsonReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = ChainAnalyzer::default();
//! analyzer.discover_chains(&[PathBuf::from("chains")], None)?;
//!
//! let reports = analyzer.inspect(None)?;
//! let json = JsonReportGenerator::new().generate_report(&reports)?;
//! std::fs::write("loops.json", json).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod chain;
pub mod chain_file;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
