pub mod neighbors;
pub mod roulette;

// Re-export the public functions
pub use neighbors::{ScoredNeighbor, nearest_tracks};
pub use roulette::{ROULETTE_POOL_SIZE, roulette_probabilities, roulette_selection};

use crate::catalog::TrackCatalog;
use crate::error::QueueError;
use crate::queue_config::QueueConfig;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

/// Terminal result of a queue walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOutcome {
    /// The walk reached the requested length: seed plus `num_songs` ids.
    Complete { track_ids: Vec<String> },
    /// Every remaining candidate was already queued before the requested
    /// length was reached; carries the partial queue.
    Exhausted { track_ids: Vec<String> },
}

impl QueueOutcome {
    pub fn track_ids(&self) -> &[String] {
        match self {
            QueueOutcome::Complete { track_ids } | QueueOutcome::Exhausted { track_ids } => {
                track_ids
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QueueOutcome::Exhausted { .. })
    }
}

/// Walk the catalog from `seed_id`, appending one roulette-selected
/// neighbor of the current tail at a time until `num_songs` tracks follow
/// the seed or no unqueued candidate remains.
///
/// The walk is strictly sequential; the caller-supplied `rng` is the only
/// source of nondeterminism, so a seeded rng reproduces a walk exactly.
pub fn generate_queue(
    catalog: &TrackCatalog,
    seed_id: &str,
    weights: &FxHashMap<String, f64>,
    attributes: &[String],
    config: &QueueConfig,
    rng: &mut impl Rng,
) -> Result<QueueOutcome, QueueError> {
    if !catalog.contains(seed_id) {
        return Err(QueueError::UnknownTrack(seed_id.to_string()));
    }

    let mut track_ids = vec![seed_id.to_string()];
    let mut queued: FxHashSet<String> = FxHashSet::default();
    queued.insert(seed_id.to_string());
    let mut current_id = seed_id.to_string();

    while track_ids.len() < config.num_songs + 1 {
        let candidates = nearest_tracks(
            catalog,
            &current_id,
            weights,
            attributes,
            config.neighborhood_size,
            config.metric,
        )?;

        let Some(selected_id) =
            roulette_selection(&candidates, &queued, config.roulette_exponent, rng)
        else {
            tracing::debug!(
                queued = track_ids.len(),
                requested = config.num_songs + 1,
                "queue walk exhausted"
            );
            return Ok(QueueOutcome::Exhausted { track_ids });
        };

        queued.insert(selected_id.clone());
        track_ids.push(selected_id.clone());
        current_id = selected_id;
    }

    Ok(QueueOutcome::Complete { track_ids })
}
