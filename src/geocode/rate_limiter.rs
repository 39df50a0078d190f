use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Global minimum spacing between external calls.
///
/// The provider budget is per-process, not per-key, so a single shared
/// last-call instant gates everyone. The lock is held across the sleep
/// so concurrent callers serialize instead of racing the timestamp.
#[derive(Debug)]
pub struct RateLimiter {
    min_delay: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self { min_delay, last_call: Mutex::new(None) }
    }

    /// Waits until at least `min_delay` has passed since the previous
    /// acquisition, then claims the current instant.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_acquire_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        let started = Instant::now();
        limiter.acquire().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn consecutive_acquires_are_spaced() {
        let limiter = RateLimiter::new(Duration::from_millis(60));
        limiter.acquire().await;
        let started = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(started.elapsed() >= Duration::from_millis(120));
    }

    #[tokio::test]
    async fn concurrent_acquires_serialize() {
        use std::sync::Arc;

        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(40)));
        limiter.acquire().await;
        let started = Instant::now();
        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move { limiter.acquire().await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert!(started.elapsed() >= Duration::from_millis(120));
    }
}
