// ABOUTME: Sourdough recipe domain models with baker's-percentage ingredient lines
// ABOUTME: Defines BakerAmount, FlourAmount, LevainAgent, RecipeDetails, SourdoughRecipe and requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Flour, NutritionFacts};

// Omitted from the wire shape when unset
#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
fn is_zero(value: &f64) -> bool {
    value.abs() < f64::EPSILON
}

/// A weighed quantity with its baker's percentage
///
/// Used for water lines, additional ingredients, levain components and the
/// aggregate lines of [`RecipeDetails`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BakerAmount {
    /// Mass in grams
    pub amount: f64,
    /// Mass as a percentage of total flour mass
    #[serde(default, skip_serializing_if = "is_zero")]
    pub baker_percentage: f64,
    /// Optional label, e.g. "Salt"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl BakerAmount {
    /// Create an unnamed amount
    #[must_use]
    pub const fn new(amount: f64, baker_percentage: f64) -> Self {
        Self {
            amount,
            baker_percentage,
            name: String::new(),
        }
    }

    /// Add a label
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A flour definition paired with the grams used in a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlourAmount {
    /// The flour being weighed
    #[serde(flatten)]
    pub flour: Flour,
    /// Mass in grams
    pub amount: f64,
}

impl FlourAmount {
    /// Pair a flour with an amount
    #[must_use]
    pub const fn new(flour: Flour, amount: f64) -> Self {
        Self { flour, amount }
    }
}

/// The pre-fermented starter, flour and water mixed into the dough
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevainAgent {
    /// Total levain mass added to the dough
    pub amount: BakerAmount,
    /// Mature starter used to build the levain
    pub starter: BakerAmount,
    /// Flours fed to the levain
    #[serde(default)]
    pub flour: Vec<FlourAmount>,
    /// Water fed to the levain
    pub water: BakerAmount,
}

/// Aggregate baker's-percentage summary of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    /// Total flour; percentage is 100 whenever any flour line exists
    pub flour: BakerAmount,
    /// Total water
    pub water: BakerAmount,
    /// Levain aggregate, taken from the levain agent
    pub levain: BakerAmount,
    /// Total of salt, seeds and other additions
    pub additional_ingredients: BakerAmount,
    /// Truncated sum of the four aggregates, in grams
    pub total_weight: u32,
}

/// What a recipe produces, e.g. 2 loaves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeYield {
    /// Unit label
    pub unit: String,
    /// Number of units
    pub amount: u32,
}

/// A stored sourdough formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourdoughRecipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name, unique within the catalog
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Flour lines in caller order
    #[serde(default)]
    pub flour: Vec<FlourAmount>,
    /// Water lines in caller order
    #[serde(default)]
    pub water: Vec<BakerAmount>,
    /// Additional ingredient lines in caller order
    #[serde(default)]
    pub additional_ingredients: Vec<BakerAmount>,
    /// Levain sub-component
    pub levain: LevainAgent,
    /// Aggregate summary
    #[serde(rename = "recipe_details")]
    pub details: RecipeDetails,
    /// Nutrition facts keyed by serving-size label
    #[serde(default)]
    pub nutrition_facts: BTreeMap<String, NutritionFacts>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// What the recipe produces
    #[serde(rename = "yield", default)]
    pub recipe_yield: RecipeYield,
}

impl SourdoughRecipe {
    /// Build a recipe from a creation request and its computed details
    ///
    /// Assigns a fresh identifier and creation timestamp.
    #[must_use]
    pub fn from_request(request: CreateSourdoughRecipeRequest, details: RecipeDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            flour: request.flour,
            water: request.water,
            additional_ingredients: request.additional_ingredients,
            levain: request.levain,
            details,
            nutrition_facts: request.nutrition_facts,
            created_at: Utc::now(),
            updated_at: None,
            recipe_yield: request.recipe_yield,
        }
    }

    /// Case-insensitive substring match on the recipe name
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Request payload for adding a sourdough recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSourdoughRecipeRequest {
    /// Recipe name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Flour lines
    #[serde(default)]
    pub flour: Vec<FlourAmount>,
    /// Water lines
    #[serde(default)]
    pub water: Vec<BakerAmount>,
    /// Levain sub-component
    #[serde(default)]
    pub levain: LevainAgent,
    /// Additional ingredient lines
    #[serde(default)]
    pub additional_ingredients: Vec<BakerAmount>,
    /// Nutrition facts keyed by serving-size label
    #[serde(default)]
    pub nutrition_facts: BTreeMap<String, NutritionFacts>,
    /// What the recipe produces
    #[serde(rename = "yield", default)]
    pub recipe_yield: RecipeYield,
}

/// Request payload for scaling a stored recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRecipeRequest {
    /// Desired total dough weight in grams
    pub final_dough_weight: u32,
}
