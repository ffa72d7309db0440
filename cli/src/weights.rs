use rustc_hash::FxHashMap;

/// Default weight profile for queue generation when no weights file is
/// given. Liveness carries weight zero.
pub fn default_weights() -> FxHashMap<String, f64> {
    [
        ("danceability", 1.2),
        ("energy", 1.2),
        ("loudness", 1.0),
        ("speechiness", 1.0),
        ("acousticness", 0.6),
        ("instrumentalness", 1.0),
        ("liveness", 0.0),
        ("valence", 1.5),
    ]
    .into_iter()
    .map(|(name, weight)| (name.to_string(), weight))
    .collect()
}

/// The attribute list for weighted scoring is the weight map's key set,
/// sorted for a stable order.
pub fn attribute_keys(weights: &FxHashMap<String, f64>) -> Vec<String> {
    let mut keys: Vec<String> = weights.keys().cloned().collect();
    keys.sort();
    keys
}
