use crate::geocode::GeocodeClient;
use crate::types::{Layer, LayerEntry, RankedEntry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Monotonically increasing count of processed ranked entries, shared
/// with whatever wants to display progress. The core only bumps it.
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter(Arc<AtomicU64>);

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Turns the head of a ranked list into annotated map entries.
pub struct LayerBuilder<'a> {
    geocoder: &'a GeocodeClient,
    progress: ProgressCounter,
}

impl<'a> LayerBuilder<'a> {
    pub fn new(geocoder: &'a GeocodeClient, progress: ProgressCounter) -> Self {
        Self { geocoder, progress }
    }

    /// Resolves at most the first `limit` ranked entries and emits one
    /// [`LayerEntry`] per successful resolution, in ranked order.
    ///
    /// Unresolvable keys are skipped but still counted as progress;
    /// the limit caps attempts, not successes, so the finished layer
    /// may hold fewer than `limit` entries.
    pub async fn build(
        &self,
        name: &str,
        ranked: &[RankedEntry],
        limit: usize,
        weight: impl Fn(&str, u64) -> u64,
        label: impl Fn(&str, u64) -> String,
    ) -> Layer {
        let mut entries = Vec::new();
        for ranked_entry in ranked.iter().take(limit) {
            if let Some(point) = self.geocoder.resolve(&ranked_entry.key).await {
                entries.push(LayerEntry {
                    point,
                    label: label(&ranked_entry.key, ranked_entry.count),
                    weight: weight(&ranked_entry.key, ranked_entry.count),
                });
            } else {
                debug!(key = %ranked_entry.key, layer = name, "dropping unresolved entry");
            }
            self.progress.bump();
        }
        Layer::new(name, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::GeocodeProviderPort;
    use crate::types::GeoPoint;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicU64;
    use std::time::Duration;

    struct MapProvider {
        calls: AtomicU64,
        known: Vec<(&'static str, GeoPoint)>,
    }

    #[async_trait]
    impl GeocodeProviderPort for MapProvider {
        async fn query(&self, name: &str) -> Option<GeoPoint> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.known.iter().find(|(k, _)| *k == name).map(|(_, p)| *p)
        }
    }

    fn ranked(pairs: &[(&str, u64)]) -> Vec<RankedEntry> {
        pairs
            .iter()
            .map(|(k, c)| RankedEntry { key: k.to_string(), count: *c })
            .collect()
    }

    const POINT: GeoPoint = GeoPoint { latitude: 1.0, longitude: 2.0 };

    #[tokio::test]
    async fn limit_caps_attempts_not_successes() {
        let provider = Arc::new(MapProvider {
            calls: AtomicU64::new(0),
            known: vec![("A", POINT), ("C", POINT)],
        });
        let geocoder = GeocodeClient::new(provider.clone(), Duration::from_millis(1));
        let builder = LayerBuilder::new(&geocoder, ProgressCounter::new());

        let layer = builder
            .build(
                "test",
                &ranked(&[("A", 5), ("B", 3), ("C", 1)]),
                2,
                |_, count| count,
                |key, _| key.to_string(),
            )
            .await;

        // B fails, C is never attempted: one entry, two provider calls.
        assert_eq!(layer.entries.len(), 1);
        assert_eq!(layer.entries[0].label, "A");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn entries_follow_ranked_order_and_weight_policy() {
        let provider = Arc::new(MapProvider {
            calls: AtomicU64::new(0),
            known: vec![("USA", POINT), ("France", POINT)],
        });
        let geocoder = GeocodeClient::new(provider, Duration::from_millis(1));
        let builder = LayerBuilder::new(&geocoder, ProgressCounter::new());

        let layer = builder
            .build(
                "countries",
                &ranked(&[("USA", 4), ("France", 2)]),
                10,
                |key, count| if key == "USA" { count * 5 } else { count * 10 },
                |key, _| key.to_string(),
            )
            .await;

        assert_eq!(layer.entries.len(), 2);
        assert_eq!(layer.entries[0].label, "USA");
        assert_eq!(layer.entries[0].weight, 20);
        assert_eq!(layer.entries[1].weight, 20);
    }

    #[tokio::test]
    async fn progress_counts_every_attempted_entry() {
        let provider =
            Arc::new(MapProvider { calls: AtomicU64::new(0), known: vec![("A", POINT)] });
        let geocoder = GeocodeClient::new(provider, Duration::from_millis(1));
        let progress = ProgressCounter::new();
        let builder = LayerBuilder::new(&geocoder, progress.clone());

        builder
            .build(
                "test",
                &ranked(&[("A", 2), ("missing", 1)]),
                5,
                |_, c| c,
                |k, _| k.to_string(),
            )
            .await;

        assert_eq!(progress.get(), 2);
    }
}
