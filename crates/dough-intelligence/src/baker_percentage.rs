// ABOUTME: Recipe detail calculator deriving aggregate baker's percentages from ingredient lines
// ABOUTME: Computes flour, water, additional ingredient totals and the truncated total weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe detail calculator
//!
//! Every aggregate is expressed relative to the total flour mass, which always
//! carries a baker's percentage of 100. Empty ingredient lists produce the zero
//! value (amount 0, percentage 0), and a zero flour total yields percentage 0
//! rather than a non-finite number. None of these functions fail.

use dough_core::constants::baking::{FLOUR_BAKER_PERCENTAGE, PERCENT};
use dough_core::models::{BakerAmount, FlourAmount, LevainAgent, RecipeDetails};

/// Sum of every flour line, fixed at 100%
#[must_use]
pub fn compute_flour_total(lines: &[FlourAmount]) -> BakerAmount {
    if lines.is_empty() {
        return BakerAmount::default();
    }

    let total: f64 = lines.iter().map(|line| line.amount).sum();
    BakerAmount::new(total, FLOUR_BAKER_PERCENTAGE)
}

/// Sum of every water line as a percentage of total flour
#[must_use]
pub fn compute_water_total(flour_total: &BakerAmount, lines: &[BakerAmount]) -> BakerAmount {
    relative_total(flour_total, lines)
}

/// Sum of every additional ingredient line as a percentage of total flour
#[must_use]
pub fn compute_additional_ingredients_total(
    flour_total: &BakerAmount,
    lines: &[BakerAmount],
) -> BakerAmount {
    relative_total(flour_total, lines)
}

/// Total dough weight in whole grams
///
/// The sum is truncated toward zero, not rounded, and saturates at the bounds of `u32`.
#[must_use]
pub fn compute_total_weight(
    flour: &BakerAmount,
    water: &BakerAmount,
    levain: &BakerAmount,
    additional_ingredients: &BakerAmount,
) -> u32 {
    let sum = flour.amount + water.amount + levain.amount + additional_ingredients.amount;
    sum as u32
}

/// Compose the full details summary for a new recipe
///
/// The levain aggregate is taken verbatim from the levain agent's `amount`.
#[must_use]
pub fn compute_recipe_details(
    flour: &[FlourAmount],
    water: &[BakerAmount],
    levain: &LevainAgent,
    additional_ingredients: &[BakerAmount],
) -> RecipeDetails {
    let flour_total = compute_flour_total(flour);
    let water_total = compute_water_total(&flour_total, water);
    let levain_total = levain.amount.clone();
    let additional_total = compute_additional_ingredients_total(&flour_total, additional_ingredients);
    let total_weight =
        compute_total_weight(&flour_total, &water_total, &levain_total, &additional_total);

    RecipeDetails {
        flour: flour_total,
        water: water_total,
        levain: levain_total,
        additional_ingredients: additional_total,
        total_weight,
    }
}

fn relative_total(flour_total: &BakerAmount, lines: &[BakerAmount]) -> BakerAmount {
    if lines.is_empty() {
        return BakerAmount::default();
    }

    let total: f64 = lines.iter().map(|line| line.amount).sum();
    let percentage = if flour_total.amount == 0.0 {
        0.0
    } else {
        total / flour_total.amount * PERCENT
    };

    BakerAmount::new(total, percentage)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use dough_core::models::Flour;

    use super::*;

    fn flour_line(amount: f64) -> FlourAmount {
        FlourAmount::new(Flour::new("T65", "Bread flour"), amount)
    }

    #[test]
    fn test_flour_total_is_hundred_percent() {
        let total = compute_flour_total(&[flour_line(900.0), flour_line(100.0)]);
        assert!((total.amount - 1000.0).abs() < f64::EPSILON);
        assert!((total.baker_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_lines_give_zero_value() {
        assert_eq!(compute_flour_total(&[]), BakerAmount::default());

        let flour = BakerAmount::new(1000.0, 100.0);
        assert_eq!(compute_water_total(&flour, &[]), BakerAmount::default());
        assert_eq!(
            compute_additional_ingredients_total(&flour, &[]),
            BakerAmount::default()
        );
    }

    #[test]
    fn test_water_percentage_derivation() {
        let flour = BakerAmount::new(1000.0, 100.0);
        let water = compute_water_total(
            &flour,
            &[BakerAmount::new(700.0, 70.0), BakerAmount::new(50.0, 5.0)],
        );
        assert!((water.amount - 750.0).abs() < f64::EPSILON);
        assert!((water.baker_percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_flour_gives_zero_percentage() {
        let water = compute_water_total(&BakerAmount::default(), &[BakerAmount::new(300.0, 0.0)]);
        assert!((water.amount - 300.0).abs() < f64::EPSILON);
        assert!(water.baker_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_weight_truncates() {
        let weight = compute_total_weight(
            &BakerAmount::new(500.6, 100.0),
            &BakerAmount::new(350.7, 70.0),
            &BakerAmount::new(100.0, 20.0),
            &BakerAmount::new(10.5, 2.0),
        );
        assert_eq!(weight, 961);
    }

    #[test]
    fn test_total_weight_saturates() {
        let negative = BakerAmount::new(-50.0, 0.0);
        let zero = BakerAmount::default();
        assert_eq!(compute_total_weight(&negative, &zero, &zero, &zero), 0);

        let huge = BakerAmount::new(1e12, 100.0);
        assert_eq!(compute_total_weight(&huge, &zero, &zero, &zero), u32::MAX);
    }

    #[test]
    fn test_recipe_details_composition() {
        let levain = LevainAgent {
            amount: BakerAmount::new(200.0, 20.0),
            ..LevainAgent::default()
        };
        let details = compute_recipe_details(
            &[flour_line(900.0), flour_line(100.0)],
            &[
                BakerAmount::new(700.0, 70.0).with_name("Water 1"),
                BakerAmount::new(50.0, 5.0).with_name("Water 2"),
            ],
            &levain,
            &[BakerAmount::new(20.0, 2.0).with_name("Salt")],
        );

        assert_eq!(details.levain, BakerAmount::new(200.0, 20.0));
        assert!((details.additional_ingredients.amount - 20.0).abs() < f64::EPSILON);
        assert!((details.additional_ingredients.baker_percentage - 2.0).abs() < 1e-9);
        assert_eq!(details.total_weight, 1970);
    }

    #[test]
    fn test_empty_recipe_details() {
        let details = compute_recipe_details(&[], &[], &LevainAgent::default(), &[]);
        assert_eq!(details, RecipeDetails::default());
    }
}
