// ABOUTME: Cache abstraction for scaled sourdough recipes keyed by recipe and target weight
// ABOUTME: Pluggable backend trait with a bounded in-memory LRU implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache factory for creating cache providers
pub mod factory;
/// In-memory cache implementation
pub mod memory;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_CLEANUP_INTERVAL_SECS,
};
use crate::models::SourdoughRecipe;

/// Cache provider trait for pluggable scale cache backends
///
/// Cache operations never fail: a backend that cannot serve a lookup reports a
/// miss, and the scaling engine recomputes.
///
/// # Examples
///
/// ```rust,no_run
/// use dough_calculator::cache::{CacheConfig, CacheProvider, ScaleKey};
/// use dough_calculator::cache::memory::InMemoryCache;
/// use uuid::Uuid;
/// # async fn example(recipe: dough_calculator::models::SourdoughRecipe) {
///
/// let cache = InMemoryCache::new(&CacheConfig {
///     enable_background_cleanup: false,
///     ..CacheConfig::default()
/// });
///
/// let key = ScaleKey::new(recipe.id, 985);
/// cache.put(key, recipe).await;
///
/// if let Some(scaled) = cache.get(&key).await {
///     println!("Found scaled recipe: {}", scaled.name);
/// }
///
/// // Drop every scaled variant of the recipe
/// cache.evict_recipe(key.recipe_id).await;
/// # }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Look up a scaled recipe; expired entries count as misses
    async fn get(&self, key: &ScaleKey) -> Option<SourdoughRecipe>;

    /// Store a scaled recipe, evicting the least recently used entry when full
    async fn put(&self, key: ScaleKey, recipe: SourdoughRecipe);

    /// Remove a single entry, returning whether it was present
    async fn evict(&self, key: &ScaleKey) -> bool;

    /// Remove every target weight cached for one recipe, returning how many were removed
    async fn evict_recipe(&self, recipe_id: Uuid) -> usize;

    /// Number of entries currently held, including expired ones not yet cleaned up
    async fn len(&self) -> usize;

    /// Whether the cache holds no entries
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Verify the backend can serve requests
    async fn health_check(&self) -> bool;

    /// Clear all cache entries (for testing/admin)
    async fn clear_all(&self);
}

/// Scale cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of scaled recipes; zero falls back to the default capacity
    pub max_entries: usize,
    /// Entry lifetime in seconds; `None` keeps entries until evicted
    pub ttl_secs: Option<u64>,
    /// Interval between sweeps for expired entries
    pub cleanup_interval_secs: u64,
    /// Enable background cleanup task (should be false in tests to avoid runtime conflicts)
    pub enable_background_cleanup: bool,
}

impl CacheConfig {
    /// Entry lifetime, if entries expire at all
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Sweep interval for the background cleanup task
    #[must_use]
    pub const fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: (DEFAULT_CACHE_TTL_SECS > 0).then_some(DEFAULT_CACHE_TTL_SECS),
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
            // Only useful when a TTL is configured; tests disable it explicitly
            enable_background_cleanup: true,
        }
    }
}

/// Identifies one scaled variant of a stored recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleKey {
    /// Source recipe identifier
    pub recipe_id: Uuid,
    /// Requested total dough weight in grams
    pub target_total_weight: u32,
}

impl ScaleKey {
    /// Create new cache key
    #[must_use]
    pub const fn new(recipe_id: Uuid, target_total_weight: u32) -> Self {
        Self {
            recipe_id,
            target_total_weight,
        }
    }
}

impl fmt::Display for ScaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recipe:{}:weight:{}",
            self.recipe_id, self.target_total_weight
        )
    }
}
