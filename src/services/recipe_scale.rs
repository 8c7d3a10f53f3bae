// ABOUTME: Recipe scaling engine returning proportionally rescaled recipes with memoization
// ABOUTME: Serves repeat requests from the scale cache and computes each key at most once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Scaling Engine
//!
//! [`RecipeScaleService::scale`] produces a copy of a stored recipe whose total
//! dough weight equals the requested target. Results are memoized per
//! `(recipe id, target weight)` in an injected [`CacheProvider`].
//!
//! Concurrent misses for the same key are serialized through a per-key gate: the
//! first caller fetches and computes, later callers find the cache populated and
//! never reach the lookup. Misses for different keys proceed independently.
//! Lookup failures are returned unchanged and are never cached. A gate is
//! released when its last holder finishes or is cancelled.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use dashmap::DashMap;
use dough_intelligence::scale_recipe;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{CacheProvider, ScaleKey};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::SourdoughRecipe;

/// Capability to fetch a stored recipe by id
///
/// Implementations must report a missing recipe with a not-found error code.
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Fetch the recipe with the given id
    async fn find_by_id(&self, id: Uuid) -> AppResult<SourdoughRecipe>;
}

type Gates = DashMap<ScaleKey, Arc<Mutex<()>>>;

/// Scaling engine with memoized results
pub struct RecipeScaleService {
    lookup: Arc<dyn RecipeLookup>,
    cache: Arc<dyn CacheProvider>,
    in_flight: Gates,
}

impl RecipeScaleService {
    /// Create an engine over a lookup capability and a scale cache
    #[must_use]
    pub fn new(lookup: Arc<dyn RecipeLookup>, cache: Arc<dyn CacheProvider>) -> Self {
        Self {
            lookup,
            cache,
            in_flight: DashMap::new(),
        }
    }

    /// Return `recipe_id` rescaled to `target_total_weight` grams
    ///
    /// Every weighed quantity becomes `round(target * amount / original_total)`;
    /// baker's percentages and names are unchanged, `details.total_weight` equals
    /// the target and the yield is cleared.
    ///
    /// # Errors
    ///
    /// Returns the lookup's error unchanged when the recipe cannot be fetched, or
    /// `ValueOutOfRange` when the stored recipe has a total weight of zero
    pub async fn scale(
        &self,
        recipe_id: Uuid,
        target_total_weight: u32,
    ) -> AppResult<SourdoughRecipe> {
        let started = Instant::now();
        let key = ScaleKey::new(recipe_id, target_total_weight);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(key = %key, "Scale cache hit");
            Self::log_completed(key, true, started);
            return Ok(cached);
        }

        let gate = InFlightGate::join(&self.in_flight, key);
        let outcome = {
            let _permit = gate.lock().await;
            match self.cache.get(&key).await {
                Some(cached) => {
                    debug!(key = %key, "Scale cache filled while waiting");
                    Ok((cached, true))
                }
                None => self.compute(key).await.map(|scaled| (scaled, false)),
            }
        };
        drop(gate);

        let (scaled, cache_hit) = outcome?;
        Self::log_completed(key, cache_hit, started);
        Ok(scaled)
    }

    /// Drop every cached scaling of a recipe, returning how many entries were removed
    pub async fn invalidate(&self, recipe_id: Uuid) -> usize {
        let removed = self.cache.evict_recipe(recipe_id).await;
        debug!(recipe_id = %recipe_id, removed, "Invalidated scaled recipes");
        removed
    }

    /// Number of keys with a miss currently being computed or waited on
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Scale cache used by this engine
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn CacheProvider> {
        &self.cache
    }

    async fn compute(&self, key: ScaleKey) -> AppResult<SourdoughRecipe> {
        debug!(key = %key, "Scale cache miss");

        let recipe = self.lookup.find_by_id(key.recipe_id).await?;
        let scaled = scale_recipe(recipe, key.target_total_weight).inspect_err(|e| {
            warn!(recipe_id = %key.recipe_id, error = %e, "Refusing to scale recipe");
        })?;

        self.cache.put(key, scaled.clone()).await;
        Ok(scaled)
    }

    fn log_completed(key: ScaleKey, cache_hit: bool, started: Instant) {
        AppLogger::log_scale_request(
            key.recipe_id,
            key.target_total_weight,
            cache_hit,
            started.elapsed().as_millis() as u64,
        );
    }
}

/// One caller's hold on the per-key gate
///
/// Dropping it, on completion or cancellation, removes the map entry once no
/// other caller holds the same gate.
struct InFlightGate<'a> {
    gates: &'a Gates,
    key: ScaleKey,
    gate: Option<Arc<Mutex<()>>>,
}

impl<'a> InFlightGate<'a> {
    fn join(gates: &'a Gates, key: ScaleKey) -> Self {
        let gate = Arc::clone(gates.entry(key).or_default().value());
        Self {
            gates,
            key,
            gate: Some(gate),
        }
    }

    async fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        Some(self.gate.as_ref()?.lock().await)
    }
}

impl Drop for InFlightGate<'_> {
    fn drop(&mut self) {
        // Release our handle first; the map then holds the only other reference
        // unless another caller is still waiting
        drop(self.gate.take());
        self.gates
            .remove_if(&self.key, |_, gate| Arc::strong_count(gate) == 1);
    }
}
