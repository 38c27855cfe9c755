//! Core chain types
//!
//! This module contains the node handle, the arena node and the
//! [`Successors`] trait that every traversable chain implements.

use std::fmt;

/// Handle to a node stored in a [`Chain`](super::Chain)
///
/// Two handles are equal only when they address the same slot of the same
/// arena, so two nodes carrying equal payloads are still different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    chain: u32,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(chain: u32, index: usize) -> Self {
        Self { chain, index }
    }

    /// Position of the node in its arena
    pub fn index(self) -> usize {
        self.index
    }

    /// Identity of the arena that issued this handle
    pub(crate) fn chain(self) -> u32 {
        self.chain
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A node owned by a chain arena
#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode<T> {
    pub(crate) payload: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> ChainNode<T> {
    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Forward navigation over a singly-linked structure
///
/// Following a node is the only navigation primitive. A node without a
/// successor yields `None`, which marks the end of the chain.
pub trait Successors {
    /// Node handle. `==` on handles must compare node identity.
    type Node: Copy + Eq;

    /// Successor of `node`, or `None` at the end of the chain
    fn successor(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` belongs to this structure
    fn contains(&self, _node: Self::Node) -> bool {
        true
    }
}

impl<S: Successors + ?Sized> Successors for &S {
    type Node = S::Node;

    fn successor(&self, node: Self::Node) -> Option<Self::Node> {
        (**self).successor(node)
    }

    fn contains(&self, node: Self::Node) -> bool {
        (**self).contains(node)
    }
}
