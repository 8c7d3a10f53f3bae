// ABOUTME: Domain service layer for the flour and sourdough recipe catalog
// ABOUTME: Provides catalog services and the recipe scaling engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold no transport concerns; a CLI or any future presentation layer
//! calls them directly and maps [`crate::errors::AppError`] codes as it sees fit.

/// Flour catalog operations
pub mod flours;

/// Recipe scaling engine with memoized results
pub mod recipe_scale;

/// Sourdough recipe catalog operations
pub mod sourdough_recipes;

pub use flours::FlourService;
pub use recipe_scale::{RecipeLookup, RecipeScaleService};
pub use sourdough_recipes::SourdoughRecipeService;
