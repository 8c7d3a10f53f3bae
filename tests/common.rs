// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, a reference recipe, and a counting recipe lookup double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `dough_calculator`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use dough_calculator::cache::CacheConfig;
use dough_calculator::errors::{AppError, AppResult};
use dough_calculator::models::{
    BakerAmount, CreateSourdoughRecipeRequest, Flour, FlourAmount, LevainAgent, RecipeYield,
    SourdoughRecipe,
};
use dough_calculator::services::RecipeLookup;
use dough_intelligence::compute_recipe_details;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Scale cache configuration without a background task
pub fn test_cache_config(max_entries: usize) -> CacheConfig {
    CacheConfig {
        max_entries,
        ttl_secs: None,
        cleanup_interval_secs: 300,
        enable_background_cleanup: false,
    }
}

/// A 1970 g two-loaf country recipe
///
/// Flour 900 + 100, water 700 + 50, salt 20, levain 200 built from
/// 45 + 45 flour, 20 starter and 90 water.
pub fn country_loaf_request(name: &str) -> CreateSourdoughRecipeRequest {
    let bread_flour = Flour::new("T65", "Bread flour");
    let whole_wheat = Flour::new("T150", "Whole wheat");

    CreateSourdoughRecipeRequest {
        name: name.to_owned(),
        description: "Open crumb country loaf".to_owned(),
        flour: vec![
            FlourAmount::new(bread_flour.clone(), 900.0),
            FlourAmount::new(whole_wheat.clone(), 100.0),
        ],
        water: vec![
            BakerAmount::new(700.0, 70.0).with_name("Water 1"),
            BakerAmount::new(50.0, 5.0).with_name("Water 2"),
        ],
        levain: LevainAgent {
            amount: BakerAmount::new(200.0, 20.0),
            starter: BakerAmount::new(20.0, 0.0),
            flour: vec![
                FlourAmount::new(bread_flour, 45.0),
                FlourAmount::new(whole_wheat, 45.0),
            ],
            water: BakerAmount::new(90.0, 0.0),
        },
        additional_ingredients: vec![BakerAmount::new(20.0, 2.0).with_name("Salt")],
        recipe_yield: RecipeYield {
            unit: "loaf".to_owned(),
            amount: 2,
        },
        ..CreateSourdoughRecipeRequest::default()
    }
}

/// Build a stored recipe from a request the way the catalog service does
pub fn stored_recipe(request: CreateSourdoughRecipeRequest) -> SourdoughRecipe {
    let details = compute_recipe_details(
        &request.flour,
        &request.water,
        &request.levain,
        &request.additional_ingredients,
    );
    SourdoughRecipe::from_request(request, details)
}

/// Message returned by a [`CountingLookup`] while it is failing
pub const LOOKUP_UNAVAILABLE: &str = "recipe store temporarily unavailable";

/// Recipe lookup double that counts calls and can simulate a slow or flaky backend
#[derive(Default)]
pub struct CountingLookup {
    recipes: DashMap<Uuid, SourdoughRecipe>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    failures_remaining: AtomicUsize,
}

impl CountingLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Fail the next `count` calls with an internal error before recovering
    pub fn failing_first(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    pub fn insert(&self, recipe: SourdoughRecipe) -> Uuid {
        let id = recipe.id;
        self.recipes.insert(id, recipe);
        id
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl RecipeLookup for CountingLookup {
    async fn find_by_id(&self, id: Uuid) -> AppResult<SourdoughRecipe> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failing = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(AppError::internal(LOOKUP_UNAVAILABLE));
        }

        self.recipes
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::recipe_not_found(format!("recipe with id {id} not found")))
    }
}
