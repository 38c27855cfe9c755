//! # Linked Chain Module
//!
//! Singly-linked chains whose only navigation primitive is "follow the
//! successor". A chain may end (the last node has no successor) or loop back
//! into itself at a single entry node.
//!
//! ## Components
//!
//! - **Successors**: the trait the detector traverses through
//! - **Chain**: arena-owned nodes addressed by [`NodeId`]
//! - **ChainBuilder**: tail-plus-loop construction for tests and fixtures
//! - **LinkNode** / **NodeRef**: nodes linked by borrowed references,
//!   compared by address
//!
//! ## Example
//!
//! ```
//! use chain_loop::chain::{Chain, Successors};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chain = Chain::new();
//! let a = chain.push("a");
//! let b = chain.push("b");
//!
//! chain.link(a, b)?;
//! chain.link(b, a)?;
//! chain.set_head(Some(a))?;
//!
//! assert_eq!(chain.successor(b), Some(a));
//! # Ok(())
//! # }
//! ```

mod arena;
mod builder;
pub mod linked;
mod types;

pub use arena::Chain;
pub use builder::ChainBuilder;
pub use linked::{LinkNode, Links, NodeRef};
pub use types::{ChainNode, NodeId, Successors};
