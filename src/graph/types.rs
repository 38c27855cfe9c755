//! Core graph types
//!
//! This module contains the data structures a chain is turned into before
//! rendering.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::NodeLabel;
use crate::detector::ChainShape;

/// Where a node sits relative to the walk from the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRole {
    /// Reachable, before the loop (or anywhere on an acyclic chain)
    Tail,
    /// First node of the loop
    Entry,
    Loop,
    Unreachable,
}

/// A chain node in the rendered graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub label: NodeLabel,
    pub role: NodeRole,
}

impl GraphNode {
    pub fn id(&self) -> &str {
        &self.label.id
    }

    pub fn in_loop(&self) -> bool {
        matches!(self.role, NodeRole::Entry | NodeRole::Loop)
    }
}

/// Successor edge kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Forward,
    /// Closes the loop: from its last node back to the entry
    BackEdge,
}

/// A chain laid out as a directed graph with its measured shape
#[derive(Debug, Clone)]
pub struct ChainGraph {
    pub(crate) name: String,
    pub(crate) graph: DiGraph<GraphNode, LinkKind>,
    pub(crate) walk: Vec<NodeIndex>,
    pub(crate) shape: ChainShape<NodeIndex>,
}

impl ChainGraph {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &DiGraph<GraphNode, LinkKind> {
        &self.graph
    }

    /// Reachable nodes in walk order, each visited once
    pub fn walk(&self) -> &[NodeIndex] {
        &self.walk
    }

    pub fn shape(&self) -> ChainShape<NodeIndex> {
        self.shape
    }

    pub fn unreachable(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].role == NodeRole::Unreachable)
    }

    pub fn entry(&self) -> Option<&GraphNode> {
        match self.shape {
            ChainShape::Cyclic { entry, .. } => Some(&self.graph[entry]),
            ChainShape::Acyclic { .. } => None,
        }
    }
}
