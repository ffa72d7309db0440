use super::neighbors::ScoredNeighbor;
use rand::Rng;
use rustc_hash::FxHashSet;

/// At most this many of the nearest unqueued candidates enter the draw.
pub const ROULETTE_POOL_SIZE: usize = 3;

/// Normalized selection probabilities over candidate distances.
///
/// Each candidate weighs `(1/distance)^exponent`; a zero distance
/// contributes base weight 1.0 instead of infinity. The output sums to
/// 1.0 and every entry is positive for positive distances.
pub fn roulette_probabilities(distances: &[f64], exponent: f64) -> Vec<f64> {
    let raw: Vec<f64> = distances
        .iter()
        .map(|&distance| {
            if distance != 0.0 {
                (1.0 / distance).powf(exponent)
            } else {
                1.0
            }
        })
        .collect();

    let total: f64 = raw.iter().sum();
    raw.iter().map(|weight| weight / total).collect()
}

/// Pick one candidate not yet queued, biased toward smaller distances.
///
/// Candidates must arrive sorted ascending; after dropping queued ids only
/// the first `ROULETTE_POOL_SIZE` stay in the draw. Returns `None` when
/// nothing survives the filter.
pub fn roulette_selection(
    candidates: &[ScoredNeighbor],
    queued_ids: &FxHashSet<String>,
    exponent: f64,
    rng: &mut impl Rng,
) -> Option<String> {
    let pool: Vec<&ScoredNeighbor> = candidates
        .iter()
        .filter(|(id, _)| !queued_ids.contains(id))
        .take(ROULETTE_POOL_SIZE)
        .collect();

    if pool.is_empty() {
        return None;
    }

    let distances: Vec<f64> = pool.iter().map(|(_, distance)| *distance).collect();
    let probabilities = roulette_probabilities(&distances, exponent);

    let draw: f64 = rng.random();
    let mut cumulative = 0.0;
    for (candidate, probability) in pool.iter().zip(&probabilities) {
        cumulative += probability;
        if draw < cumulative {
            return Some(candidate.0.clone());
        }
    }

    // Rounding can leave the cumulative sum a hair under the draw
    pool.last().map(|candidate| candidate.0.clone())
}
