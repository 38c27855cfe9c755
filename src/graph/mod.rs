//! # Chain Graph Construction and Rendering Module
//!
//! This module turns a loaded chain into a `petgraph` graph annotated with
//! its measured shape, and draws it.
//!
//! ## Components
//!
//! ### Graph Building
//! - **ChainGraphBuilder**: Measures the chain and records each node's role
//! - **GraphNode**: A chain node with its [`NodeRole`]
//! - **LinkKind**: Forward successor edge or the back edge closing a loop
//!
//! ### Graph Rendering
//! - **ChainRenderer**: Renders ASCII, Mermaid or DOT, optionally
//!   highlighting the loop
//!
//! ## Example
//!
//! ```
//! use chain_loop::core::{LoadedChain, NodeLabel};
//! use chain_loop::chain::{Chain, ChainBuilder};
//! use chain_loop::common::ConfigBuilder;
//! use chain_loop::graph::{ChainGraphBuilder, ChainRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let label = |id: &str| NodeLabel { id: id.to_string(), value: id.to_string() };
//! let chain: Chain<NodeLabel> = ChainBuilder::new()
//!     .with_payloads(vec![label("a"), label("b"), label("c")])
//!     .with_loop_back_to(Some(1))
//!     .build()?;
//!
//! let loaded = LoadedChain { name: "demo".to_string(), path: "demo.chain.toml".into(), chain };
//! let graph = ChainGraphBuilder::default().build(&loaded)?;
//!
//! let mut output = Vec::new();
//! ChainRenderer::new(true).render_dot(&graph, &mut output)?;
//!
//! let dot = String::from_utf8(output)?;
//! assert!(dot.contains("digraph"));
//! assert!(dot.contains("label=\"loop\""));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::ChainGraphBuilder;
pub use renderer::ChainRenderer;
pub use types::{ChainGraph, GraphNode, LinkKind, NodeRole};
