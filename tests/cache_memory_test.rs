// ABOUTME: Unit tests for in-memory scale cache implementation
// ABOUTME: Tests TTL expiration, LRU capacity limits, and per-recipe eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use common::{country_loaf_request, stored_recipe, test_cache_config};
use dough_calculator::cache::factory::Cache;
use dough_calculator::cache::memory::InMemoryCache;
use dough_calculator::cache::{CacheConfig, CacheProvider, ScaleKey};
use dough_calculator::constants::cache::DEFAULT_CACHE_MAX_ENTRIES;
use dough_calculator::models::SourdoughRecipe;
use uuid::Uuid;

fn recipe(name: &str) -> SourdoughRecipe {
    stored_recipe(country_loaf_request(name))
}

#[tokio::test]
async fn test_cache_put_and_get() {
    let cache = InMemoryCache::new(&test_cache_config(100));
    let recipe = recipe("Country loaf");
    let key = ScaleKey::new(recipe.id, 985);

    cache.put(key, recipe.clone()).await;

    assert_eq!(cache.get(&key).await, Some(recipe));
    assert!(cache.get(&ScaleKey::new(key.recipe_id, 986)).await.is_none());
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_cache_expiration() {
    let cache = InMemoryCache::new(&CacheConfig {
        ttl_secs: Some(1),
        ..test_cache_config(100)
    });
    let recipe = recipe("Expiring loaf");
    let key = ScaleKey::new(recipe.id, 985);

    cache.put(key, recipe).await;
    assert!(cache.get(&key).await.is_some());

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert!(cache.get(&key).await.is_none());
    // Expired entries are dropped on read
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_lru_eviction_respects_recent_reads() {
    let cache = InMemoryCache::new(&test_cache_config(2));
    let recipe = recipe("Country loaf");
    let first = ScaleKey::new(recipe.id, 500);
    let second = ScaleKey::new(recipe.id, 1000);
    let third = ScaleKey::new(recipe.id, 1500);

    cache.put(first, recipe.clone()).await;
    cache.put(second, recipe.clone()).await;
    // Touch the oldest entry so the second one becomes least recently used
    assert!(cache.get(&first).await.is_some());
    cache.put(third, recipe).await;

    assert_eq!(cache.len().await, 2);
    assert!(cache.get(&first).await.is_some());
    assert!(cache.get(&second).await.is_none());
    assert!(cache.get(&third).await.is_some());
}

#[tokio::test]
async fn test_zero_capacity_falls_back_to_default() {
    let cache = InMemoryCache::new(&test_cache_config(0));
    assert_eq!(cache.capacity().await, DEFAULT_CACHE_MAX_ENTRIES);
}

#[tokio::test]
async fn test_evict_single_key() {
    let cache = InMemoryCache::new(&test_cache_config(10));
    let recipe = recipe("Country loaf");
    let key = ScaleKey::new(recipe.id, 985);

    cache.put(key, recipe).await;
    assert!(cache.evict(&key).await);
    assert!(!cache.evict(&key).await);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_evict_recipe_removes_only_that_recipe() {
    let cache = InMemoryCache::new(&test_cache_config(10));
    let country = recipe("Country loaf");
    let rye = recipe("Rye");

    for weight in [500, 985, 1500] {
        cache.put(ScaleKey::new(country.id, weight), country.clone()).await;
    }
    cache.put(ScaleKey::new(rye.id, 985), rye.clone()).await;

    assert_eq!(cache.evict_recipe(country.id).await, 3);
    assert_eq!(cache.evict_recipe(Uuid::new_v4()).await, 0);
    assert_eq!(cache.len().await, 1);
    assert!(cache.get(&ScaleKey::new(rye.id, 985)).await.is_some());
}

#[tokio::test]
async fn test_clear_all() {
    let cache = InMemoryCache::new(&test_cache_config(10));
    let recipe = recipe("Country loaf");
    cache.put(ScaleKey::new(recipe.id, 500), recipe.clone()).await;
    cache.put(ScaleKey::new(recipe.id, 1000), recipe).await;

    cache.clear_all().await;

    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_factory_delegates_to_memory_backend() {
    let cache = Cache::new(&test_cache_config(3));
    let recipe = recipe("Country loaf");
    let key = ScaleKey::new(recipe.id, 985);

    assert!(cache.health_check().await);
    assert_eq!(cache.capacity().await, 3);

    cache.put(key, recipe.clone()).await;
    assert_eq!(cache.get(&key).await, Some(recipe));
}

#[tokio::test]
async fn test_background_cleanup_removes_expired_entries() {
    let cache = InMemoryCache::new(&CacheConfig {
        max_entries: 10,
        ttl_secs: Some(1),
        cleanup_interval_secs: 1,
        enable_background_cleanup: true,
    });
    let recipe = recipe("Country loaf");
    cache.put(ScaleKey::new(recipe.id, 985), recipe).await;

    tokio::time::sleep(Duration::from_millis(2500)).await;

    // len() does not touch entries, so only the sweeper can have removed it
    assert_eq!(cache.len().await, 0);
}
