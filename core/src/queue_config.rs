use crate::similarity::Metric;

/// Configuration for shuffle-queue generation
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Number of tracks to append after the seed
    pub num_songs: usize,
    /// How many nearest tracks to consider at each step before filtering
    pub neighborhood_size: usize,
    /// Exponent biasing roulette selection toward closer tracks
    pub roulette_exponent: f64,
    /// Weighted metric used to rank neighbors
    pub metric: Metric,
}

impl QueueConfig {
    pub fn new(
        num_songs: usize,
        neighborhood_size: usize,
        roulette_exponent: f64,
        metric: Metric,
    ) -> Self {
        Self {
            num_songs,
            neighborhood_size,
            roulette_exponent,
            metric,
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            num_songs: 30,
            neighborhood_size: 20,
            roulette_exponent: 2.0,
            metric: Metric::Euclidean,
        }
    }
}
