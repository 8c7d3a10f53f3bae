// ABOUTME: Nutrition facts attached to flours and recipe serving sizes
// ABOUTME: Plain value type passed through calculation and scaling untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Nutrition facts for a fixed serving (e.g. per 100g)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kilocalories
    pub calories: i32,
    /// Fat in grams
    pub fat: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fiber in grams
    pub fiber: f64,
}
