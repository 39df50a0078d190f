use crate::app::ports::GeocodeProviderPort;
use crate::config::GeocoderConfig;
use crate::error::Result;
use crate::types::GeoPoint;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Nominatim-backed implementation of the geocoding port.
pub struct NominatimProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimProvider {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl GeocodeProviderPort for NominatimProvider {
    /// A timeout, a non-success status, a malformed body, or an empty
    /// result set all collapse to `None`; the caller caches the miss.
    async fn query(&self, name: &str) -> Option<GeoPoint> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", name), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                debug!(name, status = %r.status(), "geocode request rejected");
                return None;
            }
            Err(e) => {
                debug!(name, error = %e, "geocode request failed");
                return None;
            }
        };

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                debug!(name, error = %e, "geocode response unreadable");
                return None;
            }
        };

        let place = places.into_iter().next()?;
        let latitude = place.lat.parse().ok()?;
        let longitude = place.lon.parse().ok()?;
        Some(GeoPoint { latitude, longitude })
    }
}
