// ABOUTME: Baker's percentage calculation and proportional recipe scaling algorithms
// ABOUTME: Pure functions over dough-core models, free of I/O and shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dough Intelligence
//!
//! The algorithmic core of the dough calculator:
//!
//! - **`baker_percentage`**: derives the aggregate [`RecipeDetails`] of a new recipe
//!   from its itemized ingredient lines
//! - **`scaling`**: rescales every weighed quantity of a stored recipe to a new total
//!   dough weight while keeping all baker's percentages
//!
//! Neither module caches or fetches anything; the scaling engine in the main crate
//! wraps [`scaling::scale_recipe`] with a lookup and a bounded cache.
//!
//! [`RecipeDetails`]: dough_core::models::RecipeDetails

/// Aggregate baker's-percentage calculator
pub mod baker_percentage;

/// Proportional scaling of recipe quantities
pub mod scaling;

pub use baker_percentage::{
    compute_additional_ingredients_total, compute_flour_total, compute_recipe_details,
    compute_total_weight, compute_water_total,
};
pub use scaling::{scale_recipe, ScaleRatio, Scalable};
