//! Trailing-edge debounce for fast-changing inputs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Debounces bursts of events down to their last occurrence.
///
/// Each call to [`settle`](Self::settle) starts a new generation and
/// waits out the delay; only the call that is still the newest when its
/// delay expires reports `true`. Typical use is search-as-you-type:
///
/// ```rust,ignore
/// if debouncer.settle().await {
///     catalog.set_search(Some(term)).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Default delay, matching the storefront's search input.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Create a debouncer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wait out the delay; returns `true` if no newer call superseded
    /// this one in the meantime.
    pub async fn settle(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        generation == self.generation.load(Ordering::SeqCst)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_single_call_settles() {
        let debouncer = Debouncer::default();
        assert!(debouncer.settle().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_call_settles() {
        let debouncer = Debouncer::default();

        let (first, second) = tokio::join!(debouncer.settle(), debouncer.settle());
        assert!(!first, "superseded call must not settle");
        assert!(second, "latest call settles");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_calls_both_settle() {
        let debouncer = Debouncer::default();
        assert!(debouncer.settle().await);
        assert!(debouncer.settle().await);
    }
}
