// ABOUTME: Domain models for the flour and sourdough recipe catalog
// ABOUTME: Re-exports flour, nutrition and recipe types shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Flour catalog entries
pub mod flour;
/// Nutrition facts
pub mod nutrition;
/// Sourdough recipes and their ingredient lines
pub mod sourdough;

pub use flour::{CreateFlourRequest, Flour};
pub use nutrition::NutritionFacts;
pub use sourdough::{
    BakerAmount, CreateSourdoughRecipeRequest, FlourAmount, LevainAgent, RecipeDetails,
    RecipeYield, ScaleRecipeRequest, SourdoughRecipe,
};
