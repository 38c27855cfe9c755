//! # Cycle Detection Module
//!
//! This module finds whether a singly-linked chain loops back on itself and,
//! if it does, the exact node where the loop begins.
//!
//! ## Algorithm
//!
//! We use Floyd's tortoise-and-hare algorithm. It needs O(n) successor
//! queries and O(1) extra memory: no visited set, no node marking.
//!
//! 1. An empty chain, or a head without a successor, has no cycle.
//! 2. A slow cursor moves one step and a fast cursor two steps per round. If
//!    the fast cursor runs off the end the chain is acyclic; if the cursors
//!    meet, they are inside the loop.
//! 3. One cursor restarts at the head, the other stays at the meeting node.
//!    Moving both one step at a time, they meet again exactly at the entry.
//!
//! With tail length `t` and loop length `c`, the slow cursor has taken
//! `t + k` steps when the cursors first meet and `t + k` is a multiple of
//! `c`. The cursor left at the meeting node is therefore `t` steps away from
//! the entry, the same distance as the head.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the search, with an optional step limit
//! - **Detection**: `NoCycle` or `CycleEntry(node)`
//! - **ChainShape**: acyclic length, or entry plus tail and loop lengths
//!
//! ## Example
//!
//! ```
//! use chain_loop::chain::ChainBuilder;
//! use chain_loop::common::ConfigBuilder;
//! use chain_loop::detector::{ChainShape, CycleDetector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // a -> b -> c -> d -> b
//! let chain = ChainBuilder::new()
//!     .with_payloads(["a", "b", "c", "d"])
//!     .with_loop_back_to(Some(1))
//!     .build()?;
//!
//! let detector = CycleDetector::new();
//! let detection = detector.detect(&chain, chain.head())?;
//!
//! let entry = detection.entry().expect("chain loops");
//! assert_eq!(chain.payload(entry), Some(&"b"));
//!
//! let shape = detector.measure(&chain, chain.head())?;
//! assert!(matches!(
//!     shape,
//!     ChainShape::Cyclic { tail_len: 1, loop_len: 3, .. }
//! ));
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
