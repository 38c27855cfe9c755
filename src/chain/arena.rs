use std::iter;
use std::sync::atomic::{AtomicU32, Ordering};

use super::types::{ChainNode, NodeId, Successors};
use crate::error::ChainLoopError;

static NEXT_CHAIN_ID: AtomicU32 = AtomicU32::new(0);

/// Arena-backed singly-linked chain
///
/// Nodes are owned by the arena and successors are plain [`NodeId`]s, so a
/// chain that loops back on itself never forms an ownership cycle. Every
/// arena stamps its handles with its own id; a clone keeps the id, since
/// its handles address the same nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<T> {
    id: u32,
    nodes: Vec<ChainNode<T>>,
    head: Option<NodeId>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_CHAIN_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
            head: None,
        }
    }

    /// Add an unlinked node and return its handle
    pub fn push(&mut self, payload: T) -> NodeId {
        let id = NodeId::new(self.id, self.nodes.len());
        self.nodes.push(ChainNode {
            payload,
            next: None,
        });
        id
    }

    /// Make `to` the successor of `from`, replacing any previous successor
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<(), ChainLoopError> {
        self.check(to)?;
        self.node_mut(from)?.next = Some(to);
        Ok(())
    }

    /// Remove the successor of `from`, returning the old one
    pub fn unlink(&mut self, from: NodeId) -> Result<Option<NodeId>, ChainLoopError> {
        Ok(self.node_mut(from)?.next.take())
    }

    pub fn set_head(&mut self, head: Option<NodeId>) -> Result<(), ChainLoopError> {
        if let Some(id) = head {
            self.check(id)?;
        }
        self.head = head;
        Ok(())
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn get(&self, id: NodeId) -> Option<&ChainNode<T>> {
        if id.chain() != self.id {
            return None;
        }
        self.nodes.get(id.index())
    }

    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(ChainNode::payload)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order, reachable from the head or not
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ChainNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(move |(index, node)| (NodeId::new(self.id, index), node))
    }

    /// Follow successors from the head.
    ///
    /// Never ends on a cyclic chain; bound it with `take`.
    pub fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.head, |&id| self.successor(id))
    }

    fn check(&self, id: NodeId) -> Result<(), ChainLoopError> {
        if id.chain() != self.id {
            Err(ChainLoopError::invalid_input(format!(
                "node {id} belongs to a different chain"
            )))
        } else if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(ChainLoopError::invalid_input(format!(
                "node {id} is not part of this chain ({} nodes)",
                self.nodes.len()
            )))
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ChainNode<T>, ChainLoopError> {
        self.check(id)?;
        Ok(&mut self.nodes[id.index()])
    }
}

impl<T> Successors for Chain<T> {
    type Node = NodeId;

    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(ChainNode::next)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.check(node).is_ok()
    }
}
