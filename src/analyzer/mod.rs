//! # Chain Analysis Module
//!
//! Discovers chain files, loads them into arena chains and runs the cycle
//! detector over each one, producing a [`ChainReport`](crate::core::ChainReport)
//! per file.
//!
//! Loading and inspection of distinct files run in parallel with rayon; each
//! individual detection is single-threaded and only borrows its chain.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use chain_loop::analyzer::ChainAnalyzer;
//! use chain_loop::detector::CycleDetector;
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = ChainAnalyzer::new(CycleDetector::new().with_step_limit(Some(1 << 20)));
//! analyzer.discover_chains(&[PathBuf::from("fixtures")], None)?;
//!
//! for report in analyzer.inspect(None)? {
//!     match report.entry() {
//!         Some(entry) => println!("{} loops back at {entry}", report.name),
//!         None => println!("{} ends", report.name),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
