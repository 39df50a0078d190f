use serde::{Deserialize, Serialize};

/// One parsed catalog record: where a film was shot and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub year: i32,
    pub location: String,
    pub country: String,
}

/// A place name together with how many records carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

/// Geographic coordinates resolved for a place name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One annotated marker or circle destined for the rendering sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub point: GeoPoint,
    pub label: String,
    pub weight: u64,
}

/// An ordered set of entries forming one map layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub entries: Vec<LayerEntry>,
}

impl Layer {
    pub fn new(name: impl Into<String>, entries: Vec<LayerEntry>) -> Self {
        Self { name: name.into(), entries }
    }
}
