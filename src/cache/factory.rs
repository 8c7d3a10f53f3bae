// ABOUTME: Cache factory selecting the scale cache backend from configuration
// ABOUTME: Wraps the chosen backend behind a single cloneable handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::memory::InMemoryCache;
use super::{CacheConfig, CacheProvider, ScaleKey};
use crate::models::SourdoughRecipe;

/// Unified scale cache handle
///
/// Currently only the in-memory backend exists; the engine depends on
/// [`CacheProvider`], so other backends can be added here without touching it.
#[derive(Clone)]
pub struct Cache {
    inner: InMemoryCache,
}

impl Cache {
    /// Create new cache instance based on configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            ttl_secs = config.ttl().map(|ttl| ttl.as_secs()),
            "Initializing in-memory scale cache"
        );
        Self {
            inner: InMemoryCache::new(config),
        }
    }

    /// Maximum number of entries held before LRU eviction
    pub async fn capacity(&self) -> usize {
        self.inner.capacity().await
    }
}

#[async_trait]
impl CacheProvider for Cache {
    async fn get(&self, key: &ScaleKey) -> Option<SourdoughRecipe> {
        self.inner.get(key).await
    }

    async fn put(&self, key: ScaleKey, recipe: SourdoughRecipe) {
        self.inner.put(key, recipe).await;
    }

    async fn evict(&self, key: &ScaleKey) -> bool {
        self.inner.evict(key).await
    }

    async fn evict_recipe(&self, recipe_id: Uuid) -> usize {
        self.inner.evict_recipe(recipe_id).await
    }

    async fn len(&self) -> usize {
        self.inner.len().await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }

    async fn clear_all(&self) {
        self.inner.clear_all().await;
    }
}
