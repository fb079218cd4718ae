//! trueno-graph library integration.
//!
//! A `CsrGraph` converts into a [`PlotGraph`], so it can be plotted on a
//! graph axe directly.
//!
//! ```rust,ignore
//! use trueno_graph::{CsrGraph, NodeId};
//!
//! let graph = CsrGraph::from_edge_list(&[(NodeId(0), NodeId(1), 1.0)])?;
//! fig.axe_mut(id)?.plot(&graph, PlotOptions::new())?;
//! ```

use trueno_graph::{CsrGraph, NodeId};

use crate::plottable::{GraphEdge, GraphNode, PlotGraph, PlotInput};

impl From<&CsrGraph> for PlotGraph {
    fn from(graph: &CsrGraph) -> Self {
        let mut plot = PlotGraph::new();

        for i in 0..graph.num_nodes() {
            let mut node = GraphNode::new(i);
            if let Some(name) = graph.get_node_name(NodeId(i as u32)) {
                node = node.label(name);
            }
            plot = plot.add_node(node);
        }

        for (src, targets, weights) in graph.iter_adjacency() {
            for (dst, weight) in targets.iter().zip(weights.iter()) {
                plot = plot.add_edge(GraphEdge::new(src.0 as usize, *dst as usize).weight(*weight));
            }
        }

        plot
    }
}

impl From<&CsrGraph> for PlotInput {
    fn from(graph: &CsrGraph) -> Self {
        PlotInput::Graph(graph.into())
    }
}

impl From<CsrGraph> for PlotInput {
    fn from(graph: CsrGraph) -> Self {
        PlotInput::Graph((&graph).into())
    }
}
