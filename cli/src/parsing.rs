use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use songgraph_core::RawRecord;
use std::{error::Error, fs, path::Path};

/// One entry of the playlist file: known metadata fields plus whatever
/// attribute fields the upstream exporter included.
#[derive(Deserialize)]
struct PlaylistEntry {
    id: Option<String>,
    title: Option<String>,
    artist: Option<String>,
    #[serde(flatten)]
    fields: FxHashMap<String, Value>,
}

/// Read a playlist JSON file: an array of flat track objects whose
/// attribute values may be JSON numbers or strings. Fields that are
/// neither are dropped here; the catalog applies its allow-list and
/// numeric coercion afterwards.
pub fn parse_playlist_file(path: &Path) -> Result<Vec<RawRecord>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let entries: Vec<PlaylistEntry> = serde_json::from_str(&contents)?;
    Ok(entries.into_iter().map(record_from_entry).collect())
}

/// Read a weights JSON file: an object mapping attribute names to
/// numeric weights.
pub fn parse_weights_file(path: &Path) -> Result<FxHashMap<String, f64>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn record_from_entry(entry: PlaylistEntry) -> RawRecord {
    let fields = entry
        .fields
        .into_iter()
        .filter_map(|(name, value)| field_text(value).map(|text| (name, text)))
        .collect();

    RawRecord {
        id: entry.id,
        title: entry.title,
        artist: entry.artist,
        fields,
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
