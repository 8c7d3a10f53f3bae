// ABOUTME: Storage collaborator traits for the flour and sourdough recipe catalog
// ABOUTME: Repository abstractions returning DatabaseError, with an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Services depend on [`FlourRepository`] and [`RecipeRepository`] rather than a
//! concrete backend. Both traits report failures as [`DatabaseError`] so services
//! can tell a lookup miss from any other failure. Names are unique per entity kind.

/// `DashMap`-backed storage used by tests and the CLI
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

pub use crate::errors::DatabaseError;
use crate::models::{Flour, SourdoughRecipe};
pub use memory::InMemoryDatabase;

/// Flour catalog storage
#[async_trait]
pub trait FlourRepository: Send + Sync {
    /// Insert a new flour; fails with `ConstraintViolation` when the name is taken
    async fn create_flour(&self, flour: Flour) -> Result<Flour, DatabaseError>;

    /// Fetch a flour by id; fails with `NotFound` when absent
    async fn get_flour(&self, id: Uuid) -> Result<Flour, DatabaseError>;

    /// List flours, newest first
    async fn list_flours(&self, offset: usize, limit: usize) -> Result<Vec<Flour>, DatabaseError>;

    /// Case-insensitive substring search on the flour name
    async fn search_flours(&self, name: &str) -> Result<Vec<Flour>, DatabaseError>;

    /// Number of stored flours
    async fn count_flours(&self) -> Result<usize, DatabaseError>;
}

/// Sourdough recipe storage
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert a new recipe; fails with `ConstraintViolation` when the name is taken
    async fn create_recipe(&self, recipe: SourdoughRecipe)
        -> Result<SourdoughRecipe, DatabaseError>;

    /// Fetch a recipe by id; fails with `NotFound` when absent
    async fn get_recipe(&self, id: Uuid) -> Result<SourdoughRecipe, DatabaseError>;

    /// List recipes ordered by `created_at`, newest first
    async fn list_recipes(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<SourdoughRecipe>, DatabaseError>;

    /// Case-insensitive substring search on the recipe name
    async fn search_recipes(&self, name: &str) -> Result<Vec<SourdoughRecipe>, DatabaseError>;

    /// Number of stored recipes
    async fn count_recipes(&self) -> Result<usize, DatabaseError>;
}
