//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout
//! chain-loop, separated from their implementation logic.

pub mod types;

pub use types::*;
