use crate::types::{GeoPoint, Layer};
use async_trait::async_trait;

/// The external geocoding capability, reduced to a single lookup.
///
/// Providers collapse their own failure modes (timeouts, empty result
/// sets, malformed responses) into `None`; the client above this port
/// treats any `None` as a terminal miss for the run.
#[async_trait]
pub trait GeocodeProviderPort: Send + Sync {
    async fn query(&self, name: &str) -> Option<GeoPoint>;
}

/// The rendering collaborator. It receives the finished layers and
/// owns every decision about file or visual output format.
#[async_trait]
pub trait RenderSinkPort: Send + Sync {
    async fn publish(&self, countries: &Layer, locations: &Layer) -> Result<(), String>;
}
