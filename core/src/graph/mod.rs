mod pairwise;
pub mod threshold;
pub mod top_n;

// Re-export the public functions
pub use pairwise::{PairScore, compute_pairwise_scores};
pub use threshold::build_threshold_graph;
pub use top_n::build_top_n_graph;

use crate::catalog::TrackCatalog;
use serde::Serialize;

/// A labeled graph node; the label is what the visualization collaborator
/// displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// An undirected weighted edge; weight is the similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Undirected weighted similarity graph: no self-loops, at most one edge
/// per unordered pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimilarityGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl SimilarityGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.edges
            .iter()
            .find(|edge| {
                (edge.source == a && edge.target == b)
                    || (edge.source == b && edge.target == a)
            })
            .map(|edge| edge.weight)
    }

    pub fn degree(&self, id: &str) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.source == id || edge.target == id)
            .count()
    }

    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|edge| {
                if edge.source == id {
                    Some(edge.target.as_str())
                } else if edge.target == id {
                    Some(edge.source.as_str())
                } else {
                    None
                }
            })
            .collect()
    }
}

fn nodes_from_catalog(catalog: &TrackCatalog) -> Vec<GraphNode> {
    catalog
        .iter()
        .map(|track| GraphNode {
            id: track.id.clone(),
            label: track.title.clone(),
        })
        .collect()
}
