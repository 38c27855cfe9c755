//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;
use std::path::PathBuf;

use crate::chain::Chain;
use crate::detector::ChainShape;

/// Payload of a node loaded from a chain file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabel {
    pub id: String,
    pub value: String,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id == self.value {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.id, self.value)
        }
    }
}

/// A chain read from disk
#[derive(Debug, Clone)]
pub struct LoadedChain {
    pub name: String,
    pub path: PathBuf,
    pub chain: Chain<NodeLabel>,
}

/// Inspection result for one chain, with node ids in place of handles
#[derive(Debug, Clone, PartialEq)]
pub struct ChainReport {
    pub name: String,
    pub path: PathBuf,
    /// Nodes declared in the file, reachable or not
    pub node_count: usize,
    pub shape: ChainShape<String>,
}

impl ChainReport {
    pub fn is_cyclic(&self) -> bool {
        self.shape.is_cyclic()
    }

    pub fn entry(&self) -> Option<&str> {
        match &self.shape {
            ChainShape::Acyclic { .. } => None,
            ChainShape::Cyclic { entry, .. } => Some(entry),
        }
    }

    pub fn tail_len(&self) -> Option<usize> {
        match self.shape {
            ChainShape::Acyclic { .. } => None,
            ChainShape::Cyclic { tail_len, .. } => Some(tail_len),
        }
    }

    pub fn loop_len(&self) -> Option<usize> {
        match self.shape {
            ChainShape::Acyclic { .. } => None,
            ChainShape::Cyclic { loop_len, .. } => Some(loop_len),
        }
    }

    /// Nodes reachable from the head
    pub fn reachable_count(&self) -> usize {
        self.shape.node_count()
    }
}
