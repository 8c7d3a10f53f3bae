// ABOUTME: Integration tests for the sourdough recipe catalog service
// ABOUTME: Covers detail calculation on create, lookups, listing order, paging and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{country_loaf_request, init_test_logging, test_cache_config};
use dough_calculator::cache::factory::Cache;
use dough_calculator::config::CatalogConfig;
use dough_calculator::database::{InMemoryDatabase, RecipeRepository};
use dough_calculator::errors::ErrorCode;
use dough_calculator::models::SourdoughRecipe;
use dough_calculator::services::{RecipeScaleService, SourdoughRecipeService};
use uuid::Uuid;

fn create_service(catalog: CatalogConfig) -> (SourdoughRecipeService, Arc<InMemoryDatabase>) {
    init_test_logging();
    let database = Arc::new(InMemoryDatabase::new());
    let service = SourdoughRecipeService::new(database.clone(), catalog);
    (service, database)
}

#[tokio::test]
async fn test_create_computes_recipe_details() {
    let (service, _) = create_service(CatalogConfig::default());

    let recipe = service
        .create(country_loaf_request("Country loaf"))
        .await
        .unwrap();

    assert_eq!(recipe.details.flour.amount, 1000.0);
    assert_eq!(recipe.details.flour.baker_percentage, 100.0);
    assert_eq!(recipe.details.water.amount, 750.0);
    assert_eq!(recipe.details.water.baker_percentage, 75.0);
    assert_eq!(recipe.details.levain.amount, 200.0);
    assert_eq!(recipe.details.levain.baker_percentage, 20.0);
    assert_eq!(recipe.details.additional_ingredients.amount, 20.0);
    assert_eq!(recipe.details.additional_ingredients.baker_percentage, 2.0);
    assert_eq!(recipe.details.total_weight, 1970);
    assert_eq!(recipe.recipe_yield.amount, 2);
    assert!(recipe.updated_at.is_none());
}

#[tokio::test]
async fn test_find_by_id_round_trips_stored_recipe() {
    let (service, _) = create_service(CatalogConfig::default());
    let created = service
        .create(country_loaf_request("Country loaf"))
        .await
        .unwrap();

    let found = service.find_by_id(created.id).await.unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_by_id_reports_missing_recipe() {
    let (service, _) = create_service(CatalogConfig::default());
    let id = Uuid::new_v4();

    let error = service.find_by_id(id).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::RecipeNotFound);
    assert_eq!(error.http_status(), 404);
    assert_eq!(error.message, format!("recipe with id {id} not found"));
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let (service, database) = create_service(CatalogConfig::default());
    service
        .create(country_loaf_request("Country loaf"))
        .await
        .unwrap();

    let error = service
        .create(country_loaf_request("Country loaf"))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(database.count_recipes().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_lists_newest_first_with_paging() {
    let (service, _) = create_service(CatalogConfig {
        default_page_size: 2,
        max_page_size: 3,
    });
    for name in ["First", "Second", "Third", "Fourth"] {
        service.create(country_loaf_request(name)).await.unwrap();
    }

    let names = |recipes: Vec<SourdoughRecipe>| {
        recipes.into_iter().map(|r| r.name).collect::<Vec<_>>()
    };

    // Zero falls back to the default page size
    assert_eq!(names(service.find(0, 0).await.unwrap()), ["Fourth", "Third"]);
    // Requests above the maximum are capped
    assert_eq!(
        names(service.find(0, 50).await.unwrap()),
        ["Fourth", "Third", "Second"]
    );
    assert_eq!(names(service.find(3, 10).await.unwrap()), ["First"]);
    assert!(service.find(10, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_name_ignores_case() {
    let (service, _) = create_service(CatalogConfig::default());
    for name in ["Country Loaf", "Rye loaf", "Focaccia"] {
        service.create(country_loaf_request(name)).await.unwrap();
    }

    let found = service.search_by_name("LOAF").await.unwrap();
    let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Country Loaf", "Rye loaf"]);

    assert!(service.search_by_name("baguette").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_service_backs_the_scaling_engine() {
    let (service, _) = create_service(CatalogConfig::default());
    let created = service
        .create(country_loaf_request("Country loaf"))
        .await
        .unwrap();

    let engine = RecipeScaleService::new(
        Arc::new(service),
        Arc::new(Cache::new(&test_cache_config(16))),
    );
    let scaled = engine.scale(created.id, 985).await.unwrap();
    assert_eq!(scaled.details.total_weight, 985);
    assert_eq!(scaled.flour[0].amount, 450.0);

    let error = engine.scale(Uuid::new_v4(), 985).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::RecipeNotFound);
}
