// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-through cache with per-resource TTLs.
//!
//! Every cached payload is wrapped as `{ data, timestamp }` (epoch millis)
//! and staleness is evaluated at read time. Writes are best effort: caching
//! is an optimization, so persistence failures are logged and swallowed.
//! Stale entries are ignored, not deleted.

use crate::store::KvStore;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Risk snapshots change hourly with time-of-day factors.
pub const RISK_MAP_TTL: Duration = Duration::from_secs(60 * 60);
/// Official security points rarely change.
pub const SECURITY_POINTS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache envelope: payload plus write time in epoch milliseconds.
#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    data: T,
    timestamp: i64,
}

/// TTL cache over the key-value store.
#[derive(Clone)]
pub struct Cache {
    store: KvStore,
}

impl Cache {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Wrap `data` with the current timestamp and persist it. Never errors.
    pub async fn put<T: Serialize>(&self, key: &str, data: &T) {
        let envelope = Envelope {
            data,
            timestamp: Utc::now().timestamp_millis(),
        };

        let encoded = match serde_json::to_string(&envelope) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to encode cache entry");
                return;
            }
        };

        if let Err(error) = self.store.set(key, &encoded).await {
            tracing::warn!(key, %error, "Failed to persist cache entry");
        }
    }

    /// Read a cached payload if it is younger than `ttl`. Absence, decode
    /// failure, and staleness all read as a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(key, %error, "Failed to read cache entry");
                return None;
            }
        };

        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(error) => {
                tracing::warn!(key, %error, "Cache entry is not decodable");
                return None;
            }
        };

        let age_ms = Utc::now()
            .timestamp_millis()
            .saturating_sub(envelope.timestamp);
        if age_ms < ttl.as_millis() as i64 {
            tracing::debug!(key, age_ms, "Cache hit");
            Some(envelope.data)
        } else {
            tracing::debug!(key, age_ms, "Cache entry stale, ignoring");
            None
        }
    }

    /// Remove a fixed set of cache keys. Best effort and idempotent.
    pub async fn clear_all(&self, keys: &[&str]) {
        for &key in keys {
            if let Err(error) = self.store.remove(key).await {
                tracing::warn!(key, %error, "Failed to remove cache entry");
            }
        }
        tracing::debug!(count = keys.len(), "Caches cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_within_ttl() {
        let cache = Cache::new(KvStore::in_memory());
        cache.put("k", &vec![1u32, 2, 3]).await;

        let hit: Option<Vec<u32>> = cache.get("k", Duration::from_secs(60)).await;
        assert_eq!(hit, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_stale_entry_reads_as_miss_but_is_kept() {
        let store = KvStore::in_memory();
        let cache = Cache::new(store.clone());

        // Envelope written two hours ago
        let old = Utc::now().timestamp_millis() - 2 * 60 * 60 * 1000;
        store
            .set("k", &format!(r#"{{"data":[1,2],"timestamp":{old}}}"#))
            .await
            .unwrap();

        let hit: Option<Vec<u32>> = cache.get("k", Duration::from_secs(60 * 60)).await;
        assert!(hit.is_none());
        // Stale entries are ignored, not deleted
        assert!(store.get("k").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_undecodable_entry_reads_as_miss() {
        let store = KvStore::in_memory();
        let cache = Cache::new(store.clone());
        store.set("k", "not json").await.unwrap();

        let hit: Option<Vec<u32>> = cache.get("k", Duration::from_secs(60)).await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_clear_all_on_empty_store_is_idempotent() {
        let store = KvStore::in_memory();
        let cache = Cache::new(store.clone());

        cache.clear_all(&["a", "b"]).await;
        cache.clear_all(&["a", "b"]).await;

        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.get("b").await.unwrap().is_none());
    }
}
