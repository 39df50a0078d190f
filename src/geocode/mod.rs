pub mod rate_limiter;

use crate::app::ports::GeocodeProviderPort;
use crate::types::GeoPoint;
use rate_limiter::RateLimiter;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info};

/// Memoized, globally throttled geocoding client.
///
/// Each normalized key resolves against the provider at most once per
/// process; both coordinates and misses are cached. Concurrent callers
/// for the same uncached key share one in-flight lookup instead of
/// issuing their own.
pub struct GeocodeClient {
    provider: Arc<dyn GeocodeProviderPort>,
    limiter: RateLimiter,
    cache: Mutex<HashMap<String, Arc<OnceCell<Option<GeoPoint>>>>>,
}

impl GeocodeClient {
    pub fn new(provider: Arc<dyn GeocodeProviderPort>, min_delay: Duration) -> Self {
        Self {
            provider,
            limiter: RateLimiter::new(min_delay),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves a free-text place name to coordinates, or `None` when
    /// the provider cannot place it. A miss is terminal for the run.
    pub async fn resolve(&self, name: &str) -> Option<GeoPoint> {
        let key = name.trim();
        if key.is_empty() {
            return None;
        }

        let cell = {
            let mut cache = self.cache.lock().await;
            cache
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        // get_or_init runs the lookup exactly once per key; later and
        // concurrent callers await the same cell.
        *cell
            .get_or_init(|| async {
                self.limiter.acquire().await;
                debug!(key, "geocode cache miss, querying provider");
                let resolved = self.provider.query(key).await;
                match &resolved {
                    Some(point) => {
                        info!(key, lat = point.latitude, lon = point.longitude, "resolved")
                    }
                    None => info!(key, "unresolved, caching miss"),
                }
                resolved
            })
            .await
    }
}
