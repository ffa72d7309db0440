use crate::catalog::TrackCatalog;
use crate::similarity::{Metric, pairwise_similarity};
use rayon::prelude::*;

/// Similarity score for one unordered pair of catalog positions (i < j).
pub type PairScore = (usize, usize, f64);

/// Score every unordered pair of tracks in the catalog, in parallel.
///
/// Incomparable pairs are skipped, not errored. Each pair is independent,
/// so no shared state exists between workers and the output does not
/// depend on completion order. `workers` pins the pool size; `None` uses
/// the global rayon pool.
pub fn compute_pairwise_scores(
    catalog: &TrackCatalog,
    metric: Metric,
    workers: Option<usize>,
) -> Vec<PairScore> {
    match workers {
        Some(count) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(count)
                .build()
                .expect("Should build similarity worker pool");
            pool.install(|| score_all_pairs(catalog, metric))
        }
        None => score_all_pairs(catalog, metric),
    }
}

fn score_all_pairs(catalog: &TrackCatalog, metric: Metric) -> Vec<PairScore> {
    let tracks: Vec<_> = catalog.iter().collect();
    let pairs = unordered_pairs(tracks.len());

    let scores: Vec<PairScore> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            pairwise_similarity(&tracks[i].attributes, &tracks[j].attributes, metric)
                .map(|score| (i, j, score))
        })
        .collect();

    tracing::debug!(
        pairs = pairs.len(),
        scored = scores.len(),
        incomparable = pairs.len() - scores.len(),
        metric = metric.as_str(),
        "computed pairwise similarities"
    );

    scores
}

fn unordered_pairs(count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push((i, j));
        }
    }
    pairs
}
