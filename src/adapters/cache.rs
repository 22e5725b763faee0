use crate::core::{LocalityLookup, RawLocalitiesResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Read-through cache around another [`LocalityLookup`].
///
/// Entries are keyed on the exact `(suburb, state)` pair and expire after
/// `ttl`. Only successful lookups are stored, and expired entries are swept
/// whenever a new one is inserted.
pub struct CachedLookup<L: LocalityLookup> {
    inner: L,
    ttl: Duration,
    entries: Mutex<HashMap<(String, String), (Instant, RawLocalitiesResponse)>>,
}

impl<L: LocalityLookup> CachedLookup<L> {
    pub fn new(inner: L, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<L: LocalityLookup> LocalityLookup for CachedLookup<L> {
    async fn fetch_localities(&self, suburb: &str, state: &str) -> Result<RawLocalitiesResponse> {
        let key = (suburb.to_string(), state.to_string());

        {
            let mut entries = self.entries.lock().await;
            match entries.get(&key) {
                Some((stored_at, raw)) if stored_at.elapsed() < self.ttl => {
                    tracing::debug!("💾 Cache hit for {} ({})", suburb, state);
                    return Ok(raw.clone());
                }
                Some(_) => {
                    entries.remove(&key);
                }
                None => {}
            }
        }

        // 不持有鎖進行網路呼叫
        let raw = self.inner.fetch_localities(suburb, state).await?;

        let mut entries = self.entries.lock().await;
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < self.ttl);
        entries.insert(key, (Instant::now(), raw.clone()));
        tracing::debug!("💾 Cached {} ({}), {} entries", suburb, state, entries.len());

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Locality, LocalityField};
    use crate::utils::error::AddressError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingLookup {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl LocalityLookup for CountingLookup {
        async fn fetch_localities(&self, suburb: &str, state: &str) -> Result<RawLocalitiesResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AddressError::EmptyResponseError);
            }
            Ok(RawLocalitiesResponse::Direct(LocalityField::One(Locality::new(
                suburb, "2000", state,
            ))))
        }
    }

    fn counting(fail: bool) -> (CountingLookup, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingLookup {
                calls: calls.clone(),
                fail,
            },
            calls,
        )
    }

    #[tokio::test]
    async fn test_repeated_lookup_served_from_cache() {
        let (inner, calls) = counting(false);
        let cache = CachedLookup::new(inner, Duration::from_secs(60));

        let first = cache.fetch_localities("SYDNEY", "NSW").await.unwrap();
        let second = cache.fetch_localities("SYDNEY", "NSW").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.entries.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_key_is_exact_suburb_and_state() {
        let (inner, calls) = counting(false);
        let cache = CachedLookup::new(inner, Duration::from_secs(60));

        cache.fetch_localities("SYDNEY", "NSW").await.unwrap();
        cache.fetch_localities("sydney", "NSW").await.unwrap();
        cache.fetch_localities("SYDNEY", "VIC").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_expired_entry_is_refetched() {
        let (inner, calls) = counting(false);
        let cache = CachedLookup::new(inner, Duration::from_millis(20));

        cache.fetch_localities("SYDNEY", "NSW").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        cache.fetch_localities("SYDNEY", "NSW").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (inner, calls) = counting(true);
        let cache = CachedLookup::new(inner, Duration::from_secs(60));

        assert!(cache.fetch_localities("SYDNEY", "NSW").await.is_err());
        assert!(cache.fetch_localities("SYDNEY", "NSW").await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(cache.entries.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_expired_entries_are_swept_on_insert() {
        let (inner, calls) = counting(false);
        let cache = CachedLookup::new(inner, Duration::from_millis(5));

        for i in 0..200 {
            cache
                .fetch_localities(&format!("SUBURB {}", i), "NSW")
                .await
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(30)).await;

        cache.fetch_localities("SYDNEY", "NSW").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 201);
        assert_eq!(cache.entries.lock().await.len(), 1);
    }
}
