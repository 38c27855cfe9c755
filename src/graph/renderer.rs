use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{ChainGraph, GraphNode, LinkKind, NodeRole};
use crate::error::ChainLoopError;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const LOOP_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const LOOP_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const ENTRY_NODE_FILL: &str = "#FFE0B2"; // Deeper orange
    pub const UNREACHABLE_FILL: &str = "#FAFAFA"; // Off-white
    pub const UNREACHABLE_STROKE: &str = "#90A4AE"; // Blue-grey
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const BACK_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(ChainLoopError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(ChainLoopError::from)
    };
}

/// Renders a [`ChainGraph`] as ASCII art, Mermaid or Graphviz DOT
pub struct ChainRenderer {
    highlight_loop: bool,
}

impl ChainRenderer {
    pub fn new(highlight_loop: bool) -> Self {
        Self { highlight_loop }
    }

    fn highlighted(&self, node: &GraphNode) -> bool {
        self.highlight_loop && node.in_loop()
    }

    pub fn render_ascii(&self, chain: &ChainGraph, output: &mut dyn Write) -> Result<()> {
        let graph = chain.graph();

        writeln_out!(output, "\n🔗 Chain: {}\n", chain.name())?;

        if chain.walk().is_empty() {
            writeln_out!(output, "(empty chain: no head)")?;
        }

        for &idx in chain.walk() {
            let node = &graph[idx];
            match node.role {
                NodeRole::Entry if self.highlight_loop => {
                    writeln_out!(output, "┌─────────────────────────────────────┐")?;
                    writeln_out!(output, "│ {} ⚠️  LOOP ENTRY", node.label)?;
                    writeln_out!(output, "└─────────────────────────────────────┘")?;
                }
                NodeRole::Loop if self.highlight_loop => {
                    writeln_out!(output, "{} ⟲", node.label)?;
                }
                _ => writeln_out!(output, "{}", node.label)?,
            }

            match graph.edges(idx).next() {
                Some(edge) if *edge.weight() == LinkKind::BackEdge => {
                    let target = &graph[edge.target()];
                    if self.highlight_loop {
                        writeln_out!(output, "  ↺ back to {} [LOOP]", target.id())?;
                    } else {
                        writeln_out!(output, "  ↓ {}", target.id())?;
                    }
                }
                Some(_) => writeln_out!(output, "  ↓")?,
                None => writeln_out!(output, "  └── (end)")?,
            }
        }

        let unreachable: Vec<NodeIndex> = chain.unreachable().collect();
        if !unreachable.is_empty() {
            writeln_out!(output, "\nUnreachable from head:")?;
            for idx in unreachable {
                let node = &graph[idx];
                match graph.edges(idx).next() {
                    Some(edge) => {
                        writeln_out!(output, "  {} → {}", node.label, graph[edge.target()].id())?
                    }
                    None => writeln_out!(output, "  {}", node.label)?,
                }
            }
        }

        if self.highlight_loop
            && let Some(entry) = chain.entry()
        {
            writeln_out!(output, "\n⚠️  = Loop entry ({})", entry.id())?;
        }

        Ok(())
    }

    pub fn render_mermaid(&self, chain: &ChainGraph, output: &mut dyn Write) -> Result<()> {
        let graph = chain.graph();

        writeln_out!(output, "graph TD")?;

        for &idx in chain.walk() {
            self.mermaid_node(chain, idx, "    ", output)?;
        }

        let unreachable: Vec<NodeIndex> = chain.unreachable().collect();
        if !unreachable.is_empty() {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph unreachable[\"Unreachable from head\"]")?;
            for idx in unreachable {
                self.mermaid_node(chain, idx, "        ", output)?;
            }
            writeln_out!(output, "    end")?;
        }

        writeln_out!(output)?;
        for edge in graph.edge_references() {
            let (from, to) = (mermaid_id(edge.source()), mermaid_id(edge.target()));
            if *edge.weight() == LinkKind::BackEdge && self.highlight_loop {
                writeln_out!(output, "    {} -.->|loop| {}", from, to)?;
            } else {
                writeln_out!(output, "    {} --> {}", from, to)?;
            }
        }

        if self.highlight_loop
            && let Some(back) = graph
                .edge_references()
                .position(|e| *e.weight() == LinkKind::BackEdge)
        {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                back,
                colors::BACK_EDGE
            )?;
        }

        Ok(())
    }

    fn mermaid_node(
        &self,
        chain: &ChainGraph,
        idx: NodeIndex,
        indent: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        let node = &chain.graph()[idx];
        let node_id = mermaid_id(idx);
        let label = node.label.to_string().replace('"', "#quot;");

        // Double circle for the entry, rounded for the rest of the loop
        let shape = match node.role {
            NodeRole::Entry if self.highlight_loop => format!("{node_id}((\"{label}\"))"),
            NodeRole::Loop if self.highlight_loop => format!("{node_id}(\"{label}\")"),
            _ => format!("{node_id}[\"{label}\"]"),
        };
        writeln_out!(output, "{}{}", indent, shape)?;

        let (fill, stroke, width) = self.node_colors(node);
        writeln_out!(
            output,
            "{}style {} fill:{},stroke:{},stroke-width:{}px",
            indent,
            node_id,
            fill,
            stroke,
            width
        )?;
        Ok(())
    }

    pub fn render_dot(&self, chain: &ChainGraph, output: &mut dyn Write) -> Result<()> {
        let graph = chain.graph();

        writeln_out!(output, "digraph \"{}\" {{", dot_escape(chain.name()))?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for &idx in chain.walk() {
            self.dot_node(graph, idx, "    ", output)?;
        }

        let unreachable: Vec<NodeIndex> = chain.unreachable().collect();
        if !unreachable.is_empty() {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph cluster_unreachable {{")?;
            writeln_out!(output, "        label=\"unreachable from head\";")?;
            writeln_out!(output, "        style=dashed;")?;
            for idx in unreachable {
                self.dot_node(graph, idx, "        ", output)?;
            }
            writeln_out!(output, "    }}")?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let from = edge.source().index();
            let to = edge.target().index();
            if *edge.weight() == LinkKind::BackEdge && self.highlight_loop {
                writeln_out!(
                    output,
                    r#"    n{} -> n{} [label="loop", color="{}", penwidth=3, style=dashed];"#,
                    from,
                    to,
                    colors::BACK_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    n{} -> n{} [color="{}", penwidth=2];"#,
                    from,
                    to,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn dot_node(
        &self,
        graph: &DiGraph<GraphNode, LinkKind>,
        idx: NodeIndex,
        indent: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        let node = &graph[idx];
        let (fill, stroke, width) = self.node_colors(node);
        let shape = if node.role == NodeRole::Entry && self.highlight_loop {
            ", shape=doubleoctagon"
        } else {
            ""
        };

        writeln_out!(
            output,
            r#"{}n{} [label="{}", style=filled, fillcolor="{}", color="{}", penwidth={}{}];"#,
            indent,
            idx.index(),
            dot_escape(&node.label.to_string()),
            fill,
            stroke,
            width,
            shape
        )?;
        Ok(())
    }

    fn node_colors(&self, node: &GraphNode) -> (&'static str, &'static str, u8) {
        match node.role {
            NodeRole::Unreachable => (colors::UNREACHABLE_FILL, colors::UNREACHABLE_STROKE, 1),
            NodeRole::Entry if self.highlight_loop => {
                (colors::ENTRY_NODE_FILL, colors::LOOP_NODE_STROKE, 3)
            }
            _ if self.highlighted(node) => (colors::LOOP_NODE_FILL, colors::LOOP_NODE_STROKE, 3),
            _ => (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE, 2),
        }
    }
}

fn mermaid_id(idx: NodeIndex) -> String {
    format!("n{}", idx.index())
}

fn dot_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
