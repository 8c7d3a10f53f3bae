// ABOUTME: In-memory scale cache with LRU eviction and optional per-entry expiry
// ABOUTME: Includes background cleanup task for expired entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::{mpsc, RwLock};
use tokio::time;
use tracing::debug;
use uuid::Uuid;

use super::{CacheConfig, CacheProvider, ScaleKey};
use crate::constants::cache::DEFAULT_CACHE_MAX_ENTRIES;
use crate::models::SourdoughRecipe;

type Store = Arc<RwLock<LruCache<ScaleKey, CacheEntry>>>;

/// Cached scaled recipe with optional expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    recipe: SourdoughRecipe,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(recipe: SourdoughRecipe, ttl: Option<Duration>) -> Self {
        Self {
            recipe,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// In-memory cache with LRU eviction and background cleanup
///
/// Uses `Arc<RwLock<LruCache>>` so the background cleanup task can share the
/// store with cache operations. `LruCache` bounds memory by dropping the least
/// recently used entry on insert once capacity is reached.
#[derive(Clone)]
pub struct InMemoryCache {
    store: Store,
    ttl: Option<Duration>,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl InMemoryCache {
    /// Default cache capacity when config specifies zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize =
        match NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES) {
            Some(n) => n,
            None => unreachable!(),
        };

    /// Create new in-memory cache with optional background cleanup task
    ///
    /// The cleanup task is only spawned when entries can expire, and must be
    /// created inside a Tokio runtime.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        let store: Store = Arc::new(RwLock::new(LruCache::new(capacity)));
        let ttl = config.ttl();

        let shutdown_tx = if config.enable_background_cleanup && ttl.is_some() {
            Some(Arc::new(Self::spawn_cleanup(
                Arc::clone(&store),
                config.cleanup_interval(),
            )))
        } else {
            None
        };

        Self {
            store,
            ttl,
            shutdown_tx,
        }
    }

    /// Maximum number of entries held before LRU eviction
    pub async fn capacity(&self) -> usize {
        self.store.read().await.cap().get()
    }

    fn spawn_cleanup(store: Store, cleanup_interval: Duration) -> mpsc::Sender<()> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut interval = time::interval(cleanup_interval);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        Self::cleanup_expired(&store).await;
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Scale cache cleanup task received shutdown signal");
                        break;
                    }
                }
            }
        });

        shutdown_tx
    }

    /// Remove all expired entries from cache
    async fn cleanup_expired(store: &Store) {
        let mut store_guard = store.write().await;

        // Collect expired keys first (can't modify while iterating)
        let expired_keys: Vec<ScaleKey> = store_guard
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| *key)
            .collect();

        for key in &expired_keys {
            store_guard.pop(key);
        }
        drop(store_guard);

        if !expired_keys.is_empty() {
            debug!(
                removed = expired_keys.len(),
                "Cleaned up expired scale cache entries"
            );
        }
    }
}

#[async_trait]
impl CacheProvider for InMemoryCache {
    async fn get(&self, key: &ScaleKey) -> Option<SourdoughRecipe> {
        // LruCache::get updates access order, so a write lock is required
        let mut store = self.store.write().await;

        let expired = store.get(key)?.is_expired();
        if expired {
            store.pop(key);
            return None;
        }

        store.get(key).map(|entry| entry.recipe.clone())
    }

    async fn put(&self, key: ScaleKey, recipe: SourdoughRecipe) {
        let entry = CacheEntry::new(recipe, self.ttl);
        if let Some((evicted, _)) = self.store.write().await.push(key, entry) {
            if evicted != key {
                debug!(evicted_key = %evicted, "Scale cache evicted least recently used entry");
            }
        }
    }

    async fn evict(&self, key: &ScaleKey) -> bool {
        self.store.write().await.pop(key).is_some()
    }

    async fn evict_recipe(&self, recipe_id: Uuid) -> usize {
        let mut store = self.store.write().await;

        let keys_to_remove: Vec<ScaleKey> = store
            .iter()
            .filter(|(key, _)| key.recipe_id == recipe_id)
            .map(|(key, _)| *key)
            .collect();

        for key in &keys_to_remove {
            store.pop(key);
        }

        keys_to_remove.len()
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    async fn health_check(&self) -> bool {
        // In-memory cache is always healthy
        true
    }

    async fn clear_all(&self) {
        self.store.write().await.clear();
    }
}

impl Drop for InMemoryCache {
    fn drop(&mut self) {
        // Only the last clone holding the sender stops the task
        if let Some(tx) = &self.shutdown_tx {
            if Arc::strong_count(tx) == 1 {
                if let Err(e) = tx.try_send(()) {
                    debug!(error = ?e, "Scale cache shutdown signal send failed (channel likely closed)");
                }
            }
        }
    }
}
