use crate::catalog::Track;
use crate::error::SimilarityError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Metric used to score a pair of feature vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Cosine,
    Euclidean,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
        }
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(SimilarityError::InvalidMetric(name.to_string())),
        }
    }
}

/// Score two attribute mappings over the intersection of their keys.
///
/// Returns `None` when the tracks share no attributes — an incomparable
/// pair, which callers must treat as "no edge possible" rather than an
/// error. Cosine scores land in [-1, 1]; euclidean scores are `1/(1+d)`
/// in (0, 1] with identical vectors pinned to exactly 1.0.
pub fn pairwise_similarity(
    a: &FxHashMap<String, f64>,
    b: &FxHashMap<String, f64>,
    metric: Metric,
) -> Option<f64> {
    let mut common_keys: Vec<&String> =
        a.keys().filter(|key| b.contains_key(*key)).collect();
    if common_keys.is_empty() {
        return None;
    }
    // Sorted so vector assembly never depends on hash iteration order
    common_keys.sort();

    let vector_a: Vec<f64> = common_keys.iter().map(|key| a[*key]).collect();
    let vector_b: Vec<f64> = common_keys.iter().map(|key| b[*key]).collect();

    match metric {
        Metric::Euclidean => {
            let distance = euclidean_distance(&vector_a, &vector_b);
            if distance == 0.0 {
                Some(1.0)
            } else {
                Some(1.0 / (1.0 + distance))
            }
        }
        // A zero-norm vector has no direction to compare, so the pair is
        // incomparable under cosine.
        Metric::Cosine => cosine_similarity(&vector_a, &vector_b),
    }
}

/// Weighted score over a fixed attribute list; every listed attribute
/// must be present on both tracks, otherwise `MissingAttribute` (no
/// partial-overlap fallback in this mode).
///
/// Polarity differs by metric: euclidean returns a *distance* (0 =
/// identical, larger = less similar) while cosine returns a *similarity*
/// (1 = identical). Callers sorting ascending-as-nearest must know which
/// one they asked for.
pub fn weighted_score(
    a: &Track,
    b: &Track,
    attributes: &[String],
    weights: &FxHashMap<String, f64>,
    metric: Metric,
) -> Result<f64, SimilarityError> {
    match metric {
        Metric::Euclidean => {
            let mut sum = 0.0;
            for name in attributes {
                let weight = weights.get(name).copied().unwrap_or(1.0);
                let value_a = attribute_value(a, name)?;
                let value_b = attribute_value(b, name)?;
                sum += weight * (value_a - value_b).powi(2);
            }
            Ok(sum.sqrt())
        }
        Metric::Cosine => {
            let mut vector_a = Vec::with_capacity(attributes.len());
            let mut vector_b = Vec::with_capacity(attributes.len());
            for name in attributes {
                let weight = weights.get(name).copied().unwrap_or(1.0);
                vector_a.push(weight * attribute_value(a, name)?);
                vector_b.push(weight * attribute_value(b, name)?);
            }
            // Zero-norm vectors score 0.0 here: weighted mode has no
            // incomparable outcome to report.
            Ok(cosine_similarity(&vector_a, &vector_b).unwrap_or(0.0))
        }
    }
}

fn attribute_value(track: &Track, name: &str) -> Result<f64, SimilarityError> {
    track
        .attributes
        .get(name)
        .copied()
        .ok_or_else(|| SimilarityError::MissingAttribute {
            track_id: track.id.clone(),
            attribute: name.to_string(),
        })
}

fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    Some(dot / (norm_a * norm_b))
}
