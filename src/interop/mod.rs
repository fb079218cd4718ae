//! Ecosystem integrations.
//!
//! - trueno-graph: `CsrGraph` as plot input (feature `graph`)

#[cfg(feature = "graph")]
#[cfg_attr(docsrs, doc(cfg(feature = "graph")))]
pub mod trueno_graph;
