// ABOUTME: Proportional rescaling of recipe quantities to a new total dough weight
// ABOUTME: Defines ScaleRatio, the Scalable trait and scale_recipe over sourdough recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe scaling
//!
//! A single rounding rule lives in [`ScaleRatio::apply`]: every weighed amount
//! becomes `round(target * amount / original)`, rounding half away from zero.
//! Every shape that carries grams implements [`Scalable`] in terms of it, so flour
//! lines, water lines, levain components and detail aggregates all scale the
//! same way. Baker's percentages and names are never touched.

use dough_core::errors::{AppError, AppResult};
use dough_core::models::{
    BakerAmount, FlourAmount, LevainAgent, RecipeDetails, RecipeYield, SourdoughRecipe,
};
use tracing::debug;

/// Ratio between the original and the target total dough weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatio {
    original_total: f64,
    target_total: f64,
}

impl ScaleRatio {
    /// Build a ratio, or `None` when the original total is zero
    #[must_use]
    pub fn new(original_total: u32, target_total: u32) -> Option<Self> {
        if original_total == 0 {
            return None;
        }

        Some(Self {
            original_total: f64::from(original_total),
            target_total: f64::from(target_total),
        })
    }

    /// Rescale one amount in grams
    #[must_use]
    pub fn apply(self, amount: f64) -> f64 {
        (self.target_total * amount / self.original_total).round()
    }
}

/// A value carrying weighed quantities that can be rescaled in place
pub trait Scalable {
    /// Replace every amount with its rescaled value
    fn scale_by(&mut self, ratio: ScaleRatio);
}

impl Scalable for BakerAmount {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.amount = ratio.apply(self.amount);
    }
}

impl Scalable for FlourAmount {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.amount = ratio.apply(self.amount);
    }
}

impl<T: Scalable> Scalable for Vec<T> {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.iter_mut().for_each(|item| item.scale_by(ratio));
    }
}

impl Scalable for LevainAgent {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.amount.scale_by(ratio);
        self.starter.scale_by(ratio);
        self.flour.scale_by(ratio);
        self.water.scale_by(ratio);
    }
}

impl Scalable for RecipeDetails {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.flour.scale_by(ratio);
        self.water.scale_by(ratio);
        self.levain.scale_by(ratio);
        self.additional_ingredients.scale_by(ratio);
        self.total_weight = ratio.apply(f64::from(self.total_weight)) as u32;
    }
}

impl Scalable for SourdoughRecipe {
    fn scale_by(&mut self, ratio: ScaleRatio) {
        self.flour.scale_by(ratio);
        self.water.scale_by(ratio);
        self.additional_ingredients.scale_by(ratio);
        self.levain.scale_by(ratio);
        self.details.scale_by(ratio);
    }
}

/// Produce a copy of `recipe` whose total dough weight is `target_total_weight`
///
/// The scaled recipe's `details.total_weight` equals the target exactly and its
/// yield is reset, since the number of loaves no longer follows from the weight.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when the source recipe has a total weight
/// of zero, because no ratio can be derived from it.
pub fn scale_recipe(
    mut recipe: SourdoughRecipe,
    target_total_weight: u32,
) -> AppResult<SourdoughRecipe> {
    let ratio = ScaleRatio::new(recipe.details.total_weight, target_total_weight).ok_or_else(
        || {
            AppError::value_out_of_range(format!(
                "recipe with id {} has a total weight of zero and cannot be scaled",
                recipe.id
            ))
        },
    )?;

    debug!(
        recipe_id = %recipe.id,
        original_total_weight = recipe.details.total_weight,
        target_total_weight,
        "Scaling recipe"
    );

    recipe.scale_by(ratio);
    recipe.details.total_weight = target_total_weight;
    recipe.recipe_yield = RecipeYield::default();

    Ok(recipe)
}
