//! # Configuration Module
//!
//! This module provides configuration structures for the chain-loop
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command
//! - **SpectacleOptions**: Configuration for the `spectacle` command
//!
//! ## Example
//!
//! ```
//! use chain_loop::cli::{GraphFormat, OutputFormat};
//! use chain_loop::common::ConfigBuilder;
//! use chain_loop::config::{InspectConfig, SpectacleOptions};
//!
//! let inspect = InspectConfig::builder()
//!     .with_paths(vec!["chains".into()])
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(inspect.step_limit, None);
//!
//! let spectacle = SpectacleOptions::builder()
//!     .with_file("chains/loop.chain.toml".into())
//!     .with_format(GraphFormat::Dot)
//!     .build()
//!     .unwrap();
//! assert!(spectacle.highlight_loop);
//! ```

pub mod inspect;
pub mod spectacle;

pub use inspect::InspectConfig;
pub use spectacle::SpectacleOptions;
