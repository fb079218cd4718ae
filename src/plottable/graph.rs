//! Graphs as plot input.
//!
//! A [`PlotGraph`] is drawn structurally (nodes and edges) on a graph axe;
//! it never becomes a line.

/// A node in the graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphNode {
    /// Node identifier
    pub id: usize,
    /// Node label (optional)
    pub label: Option<String>,
}

impl GraphNode {
    /// Create a new node.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self { id, label: None }
    }

    /// Set the node label.
    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// A directed edge in the graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphEdge {
    /// Source node id
    pub source: usize,
    /// Target node id
    pub target: usize,
    /// Edge weight
    pub weight: f32,
}

impl GraphEdge {
    /// Create a new edge of weight 1.
    #[must_use]
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target, weight: 1.0 }
    }

    /// Set edge weight.
    #[must_use]
    pub fn weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

/// A directed multigraph.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlotGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl PlotGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(source, target, weight)` triples.
    #[must_use]
    pub fn from_edges(edges: &[(usize, usize, f32)]) -> Self {
        edges.iter().fold(Self::new(), |g, &(s, t, w)| g.add_edge(GraphEdge::new(s, t).weight(w)))
    }

    /// Add a node, replacing the label of an existing node with the same id.
    #[must_use]
    pub fn add_node(mut self, node: GraphNode) -> Self {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
        self
    }

    /// Add an edge. Missing endpoints are added as unlabeled nodes.
    #[must_use]
    pub fn add_edge(mut self, edge: GraphEdge) -> Self {
        for id in [edge.source, edge.target] {
            if !self.has_node(id) {
                self.nodes.push(GraphNode::new(id));
            }
        }
        self.edges.push(edge);
        self
    }

    /// Whether a node with this id exists.
    #[must_use]
    pub fn has_node(&self, id: usize) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Targets of the edges leaving `id`.
    pub fn successors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter(move |e| e.source == id).map(|e| e.target)
    }
}
