// ABOUTME: Sourdough recipe catalog service for creation, lookup, listing and search
// ABOUTME: Computes recipe details on creation and maps storage errors to AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use dough_intelligence::compute_recipe_details;
use tracing::{error, info};
use uuid::Uuid;

use super::recipe_scale::RecipeLookup;
use crate::config::CatalogConfig;
use crate::database::{DatabaseError, RecipeRepository};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{CreateSourdoughRecipeRequest, SourdoughRecipe};

/// Catalog operations on sourdough recipes
#[derive(Clone)]
pub struct SourdoughRecipeService {
    repository: Arc<dyn RecipeRepository>,
    catalog: CatalogConfig,
}

impl SourdoughRecipeService {
    /// Create a service over the given storage collaborator
    #[must_use]
    pub fn new(repository: Arc<dyn RecipeRepository>, catalog: CatalogConfig) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Build a recipe from the request, derive its details and persist it
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when a recipe with the same name exists, or a
    /// database error when storage fails
    pub async fn create(&self, request: CreateSourdoughRecipeRequest) -> AppResult<SourdoughRecipe> {
        let details = compute_recipe_details(
            &request.flour,
            &request.water,
            &request.levain,
            &request.additional_ingredients,
        );
        let recipe = SourdoughRecipe::from_request(request, details);

        match self.repository.create_recipe(recipe).await {
            Ok(created) => {
                info!(
                    recipe_id = %created.id,
                    name = %created.name,
                    total_weight = created.details.total_weight,
                    "Created sourdough recipe"
                );
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Failed to create sourdough recipe");
                Err(e.into())
            }
        }
    }

    /// Fetch a recipe by id
    ///
    /// # Errors
    ///
    /// Returns `RecipeNotFound` when no recipe has this id
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<SourdoughRecipe> {
        self.repository
            .get_recipe(id)
            .await
            .map_err(|e| recipe_lookup_error(id, e))
    }

    /// List recipes newest first; `limit` is clamped by the catalog configuration
    ///
    /// # Errors
    ///
    /// Returns a database error when storage fails
    pub async fn find(&self, offset: usize, limit: usize) -> AppResult<Vec<SourdoughRecipe>> {
        let limit = self.catalog.clamp_limit(limit);
        let recipes = self
            .repository
            .list_recipes(offset, limit)
            .await
            .map_err(|e| {
                error!(error = %e, offset, limit, "Failed to find sourdough recipes");
                AppError::from(e)
            })?;

        AppLogger::log_catalog_operation("find", "recipe", true, recipes.len());
        Ok(recipes)
    }

    /// Case-insensitive search on the recipe name
    ///
    /// # Errors
    ///
    /// Returns a database error when storage fails
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<SourdoughRecipe>> {
        let recipes = self.repository.search_recipes(name).await.map_err(|e| {
            error!(error = %e, name, "Failed to search sourdough recipes by name");
            AppError::from(e)
        })?;

        AppLogger::log_catalog_operation("search", "recipe", true, recipes.len());
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeLookup for SourdoughRecipeService {
    async fn find_by_id(&self, id: Uuid) -> AppResult<SourdoughRecipe> {
        Self::find_by_id(self, id).await
    }
}

fn recipe_lookup_error(id: Uuid, error: DatabaseError) -> AppError {
    if error.is_not_found() {
        AppError::recipe_not_found(format!("recipe with id {id} not found")).with_source(error)
    } else {
        error!(recipe_id = %id, error = %error, "Failed to find sourdough recipe by id");
        error.into()
    }
}
