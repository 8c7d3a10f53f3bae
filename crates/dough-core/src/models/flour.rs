// ABOUTME: Flour catalog entries and creation requests
// ABOUTME: Defines Flour and CreateFlourRequest used by the flour service and recipe lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::NutritionFacts;

/// A flour definition stored in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flour {
    /// Unique flour identifier
    pub id: Uuid,
    /// Milling type, e.g. "T65" or "whole wheat"
    pub flour_type: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Nutrition facts per 100g
    #[serde(default)]
    pub nutrition_facts: NutritionFacts,
}

impl Flour {
    /// Create a flour with a fresh identifier
    #[must_use]
    pub fn new(flour_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            flour_type: flour_type.into(),
            name: name.into(),
            description: String::new(),
            nutrition_facts: NutritionFacts::default(),
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set nutrition facts
    #[must_use]
    pub const fn with_nutrition_facts(mut self, nutrition_facts: NutritionFacts) -> Self {
        self.nutrition_facts = nutrition_facts;
        self
    }
}

/// Request payload for adding a flour to the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFlourRequest {
    /// Milling type
    pub flour_type: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Nutrition facts per 100g
    #[serde(default)]
    pub nutrition_facts: NutritionFacts,
}

impl CreateFlourRequest {
    /// Turn the request into a catalog entry with a fresh identifier
    #[must_use]
    pub fn into_flour(self) -> Flour {
        Flour {
            id: Uuid::new_v4(),
            flour_type: self.flour_type,
            name: self.name,
            description: self.description,
            nutrition_facts: self.nutrition_facts,
        }
    }
}
