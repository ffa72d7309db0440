use crate::error::CatalogError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Attributes considered when building the similarity graph.
pub const SELECTED_ATTRIBUTES: [&str; 7] = [
    "danceability",
    "energy",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
];

/// Extended allow-list for weighted queue generation.
pub const EXTENDED_ATTRIBUTES: [&str; 9] = [
    "danceability",
    "energy",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "loudness",
    "tempo",
];

/// One unvalidated record as handed over by the upstream feature
/// collaborator. Attribute values arrive as raw text; numeric coercion
/// happens during catalog construction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub fields: FxHashMap<String, String>,
}

/// A validated track with its retained numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub attributes: FxHashMap<String, f64>,
}

/// Insertion-ordered collection of validated tracks with O(1) id lookup.
/// Read-only once built; both the graph and queue phases borrow it.
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
    index: FxHashMap<String, usize>,
}

impl TrackCatalog {
    /// Validate records against the graph attribute allow-list.
    pub fn from_records(records: &[RawRecord]) -> Result<Self, CatalogError> {
        Self::from_records_with_allowlist(records, &SELECTED_ATTRIBUTES)
    }

    /// Validate records, retaining only attributes named in `allowed`
    /// whose raw value coerces to a finite number. Disallowed and
    /// non-numeric fields are dropped silently; a record without an id
    /// aborts the whole load.
    pub fn from_records_with_allowlist(
        records: &[RawRecord],
        allowed: &[&str],
    ) -> Result<Self, CatalogError> {
        let mut tracks: Vec<Track> = Vec::with_capacity(records.len());
        let mut index =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());

        for (position, record) in records.iter().enumerate() {
            let track = build_track(record, allowed)
                .ok_or(CatalogError::MalformedRecord { position })?;

            match index.get(&track.id) {
                // Duplicate id: the later record wins, keeping the
                // original position.
                Some(&existing) => tracks[existing] = track,
                None => {
                    index.insert(track.id.clone(), tracks.len());
                    tracks.push(track);
                }
            }
        }

        Ok(Self { tracks, index })
    }

    pub fn get(&self, track_id: &str) -> Option<&Track> {
        self.index
            .get(track_id)
            .map(|&position| &self.tracks[position])
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.index.contains_key(track_id)
    }

    /// Tracks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn build_track(record: &RawRecord, allowed: &[&str]) -> Option<Track> {
    let id = record.id.as_deref().filter(|id| !id.is_empty())?;

    let mut attributes = FxHashMap::default();
    for (name, raw_value) in &record.fields {
        if !allowed.contains(&name.as_str()) {
            continue;
        }
        if let Ok(value) = raw_value.parse::<f64>() {
            if value.is_finite() {
                attributes.insert(name.clone(), value);
            }
        }
    }

    Some(Track {
        id: id.to_string(),
        title: record
            .title
            .clone()
            .unwrap_or_else(|| "No Title".to_string()),
        artist: record
            .artist
            .clone()
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        attributes,
    })
}
