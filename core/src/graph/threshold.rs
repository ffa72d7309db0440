use super::{GraphEdge, SimilarityGraph, compute_pairwise_scores, nodes_from_catalog};
use crate::catalog::TrackCatalog;
use crate::similarity::Metric;

/// Build a graph admitting every pair that scores strictly above
/// `threshold`. Degree is unbounded.
pub fn build_threshold_graph(
    catalog: &TrackCatalog,
    metric: Metric,
    threshold: f64,
    workers: Option<usize>,
) -> SimilarityGraph {
    let nodes = nodes_from_catalog(catalog);
    let tracks: Vec<_> = catalog.iter().collect();

    let edges: Vec<GraphEdge> = compute_pairwise_scores(catalog, metric, workers)
        .into_iter()
        .filter(|&(_, _, score)| score > threshold)
        .map(|(i, j, score)| GraphEdge {
            source: tracks[i].id.clone(),
            target: tracks[j].id.clone(),
            weight: score,
        })
        .collect();

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        threshold,
        "built threshold graph"
    );

    SimilarityGraph { nodes, edges }
}
