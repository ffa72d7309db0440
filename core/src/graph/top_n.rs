use super::{GraphEdge, SimilarityGraph, compute_pairwise_scores, nodes_from_catalog};
use crate::catalog::TrackCatalog;
use crate::similarity::Metric;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Build a graph where each node contributes an edge to its `n`
/// highest-scoring partners under unweighted cosine.
///
/// Both endpoints pick independently and the result is the union of all
/// per-node picks, so realized degree can exceed `n`. Ties rank by score
/// first, then lower catalog position — stable, but not part of the
/// contract.
pub fn build_top_n_graph(
    catalog: &TrackCatalog,
    n: usize,
    workers: Option<usize>,
) -> SimilarityGraph {
    let nodes = nodes_from_catalog(catalog);
    let tracks: Vec<_> = catalog.iter().collect();

    // Per-node neighbor accumulator over the shared pairwise results
    let mut neighbor_scores: FxHashMap<usize, Vec<(usize, f64)>> = FxHashMap::default();
    for (i, j, score) in compute_pairwise_scores(catalog, Metric::Cosine, workers) {
        neighbor_scores.entry(i).or_default().push((j, score));
        neighbor_scores.entry(j).or_default().push((i, score));
    }

    let mut admitted: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut edges = Vec::new();

    for position in 0..tracks.len() {
        let Some(scores) = neighbor_scores.get_mut(&position) else {
            continue;
        };
        scores.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        for &(neighbor, score) in scores.iter().take(n) {
            let key = (position.min(neighbor), position.max(neighbor));
            if admitted.insert(key) {
                edges.push(GraphEdge {
                    source: tracks[key.0].id.clone(),
                    target: tracks[key.1].id.clone(),
                    weight: score,
                });
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), n, "built top-n graph");

    SimilarityGraph { nodes, edges }
}
