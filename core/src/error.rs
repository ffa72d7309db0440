use thiserror::Error;

/// Failures while validating raw records into a track catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("record at position {position} has no id")]
    MalformedRecord { position: usize },
}

/// Failures while scoring a pair of tracks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("invalid similarity metric '{0}', expected 'cosine' or 'euclidean'")]
    InvalidMetric(String),

    /// Weighted mode only: every listed attribute must be present on both
    /// tracks. Unweighted mode treats missing overlap as incomparable
    /// instead.
    #[error("track '{track_id}' is missing attribute '{attribute}'")]
    MissingAttribute { track_id: String, attribute: String },
}

/// Failures while generating a shuffle queue. Running out of candidates is
/// not an error; see `QueueOutcome::Exhausted`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("track '{0}' not found in catalog")]
    UnknownTrack(String),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}
