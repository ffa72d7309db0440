use crate::catalog::TrackCatalog;
use crate::error::QueueError;
use crate::similarity::{Metric, weighted_score};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A candidate track id with its weighted score to the reference track.
pub type ScoredNeighbor = (String, f64);

/// The `k` tracks closest to `track_id` by weighted score, sorted
/// ascending.
///
/// Under the euclidean metric the score is a distance, so the sort puts
/// the nearest tracks first. Under the cosine metric the score is a
/// similarity, and the same ascending sort puts the most similar tracks
/// last — both orderings are kept as-is (see the queue tests).
pub fn nearest_tracks(
    catalog: &TrackCatalog,
    track_id: &str,
    weights: &FxHashMap<String, f64>,
    attributes: &[String],
    k: usize,
    metric: Metric,
) -> Result<Vec<ScoredNeighbor>, QueueError> {
    let target = catalog
        .get(track_id)
        .ok_or_else(|| QueueError::UnknownTrack(track_id.to_string()))?;

    let mut scored = Vec::with_capacity(catalog.len().saturating_sub(1));
    for (position, track) in catalog.iter().enumerate() {
        if track.id == target.id {
            continue;
        }
        let score = weighted_score(target, track, attributes, weights, metric)?;
        scored.push((position, track.id.clone(), score));
    }

    // Ascending score; catalog position breaks ties stably
    scored.sort_by(|a, b| {
        a.2.partial_cmp(&b.2)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(k);

    Ok(scored
        .into_iter()
        .map(|(_, id, score)| (id, score))
        .collect())
}
