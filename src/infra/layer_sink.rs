use crate::app::ports::RenderSinkPort;
use crate::types::Layer;
use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Writes both layers as one JSON document for a downstream renderer.
pub struct JsonFileSink {
    path: PathBuf,
}

#[derive(Serialize)]
struct MapDocument<'a> {
    countries: &'a Layer,
    locations: &'a Layer,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RenderSinkPort for JsonFileSink {
    async fn publish(&self, countries: &Layer, locations: &Layer) -> Result<(), String> {
        let document = MapDocument { countries, locations };
        let json = serde_json::to_string_pretty(&document).map_err(|e| e.to_string())?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| format!("Failed to write '{}': {}", self.path.display(), e))?;
        info!(path = %self.path.display(), "layers published");
        Ok(())
    }
}
