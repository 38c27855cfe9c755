use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{ChainGraph, GraphNode, LinkKind, NodeRole};
use crate::chain::NodeId;
use crate::core::LoadedChain;
use crate::detector::{ChainShape, CycleDetector};
use crate::error::ChainLoopError;

/// Builds a [`ChainGraph`] from a loaded chain
///
/// Arena nodes are added in order, so a node's `NodeId` index and its
/// `NodeIndex` coincide.
#[derive(Debug, Clone, Default)]
pub struct ChainGraphBuilder {
    detector: CycleDetector,
}

fn to_index(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.index())
}

impl ChainGraphBuilder {
    pub fn new(detector: CycleDetector) -> Self {
        Self { detector }
    }

    pub fn build(&self, loaded: &LoadedChain) -> Result<ChainGraph, ChainLoopError> {
        let chain = &loaded.chain;
        let shape = self.detector.measure(chain, chain.head())?.map(to_index);

        // The shape bounds the walk, so this terminates on loops too
        let walk: Vec<NodeIndex> = chain.walk().take(shape.node_count()).map(to_index).collect();

        let mut graph = DiGraph::with_capacity(chain.len(), chain.len());
        for (_, node) in chain.iter() {
            graph.add_node(GraphNode {
                label: node.payload().clone(),
                role: NodeRole::Unreachable,
            });
        }

        for (position, &idx) in walk.iter().enumerate() {
            graph[idx].role = match shape {
                ChainShape::Cyclic { entry, .. } if idx == entry => NodeRole::Entry,
                ChainShape::Cyclic { tail_len, .. } if position >= tail_len => NodeRole::Loop,
                _ => NodeRole::Tail,
            };
        }

        let back_edge_source = match shape {
            ChainShape::Cyclic { .. } => walk.last().copied(),
            ChainShape::Acyclic { .. } => None,
        };

        for (id, node) in chain.iter() {
            if let Some(next) = node.next() {
                let from = to_index(id);
                let kind = if Some(from) == back_edge_source {
                    LinkKind::BackEdge
                } else {
                    LinkKind::Forward
                };
                graph.add_edge(from, to_index(next), kind);
            }
        }

        Ok(ChainGraph {
            name: loaded.name.clone(),
            graph,
            walk,
            shape,
        })
    }
}
