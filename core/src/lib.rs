pub mod catalog;
pub mod error;
pub mod graph;
pub mod queue;
pub mod queue_config;
pub mod similarity;

// Re-export commonly used items
pub use catalog::{EXTENDED_ATTRIBUTES, RawRecord, SELECTED_ATTRIBUTES, Track, TrackCatalog};
pub use error::{CatalogError, QueueError, SimilarityError};
pub use graph::{
    GraphEdge, GraphNode, SimilarityGraph, build_threshold_graph, build_top_n_graph,
    compute_pairwise_scores,
};
pub use queue::{
    QueueOutcome, ROULETTE_POOL_SIZE, generate_queue, nearest_tracks, roulette_probabilities,
    roulette_selection,
};
pub use queue_config::QueueConfig;
pub use similarity::{Metric, pairwise_similarity, weighted_score};
