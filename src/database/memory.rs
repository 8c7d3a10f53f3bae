// ABOUTME: In-memory catalog storage backed by DashMap with unique name enforcement
// ABOUTME: Implements FlourRepository and RecipeRepository for tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::{DatabaseError, FlourRepository, RecipeRepository};
use crate::models::{Flour, SourdoughRecipe};

/// Stored row with its insertion sequence number
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    item: T,
}

/// One collection with a unique name index
#[derive(Debug)]
struct Table<T> {
    entity_type: &'static str,
    rows: DashMap<Uuid, Row<T>>,
    names: DashMap<String, Uuid>,
    next_seq: AtomicU64,
}

impl<T: Clone> Table<T> {
    fn new(entity_type: &'static str) -> Self {
        Self {
            entity_type,
            rows: DashMap::new(),
            names: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    fn insert(&self, id: Uuid, name: &str, value: T) -> Result<T, DatabaseError> {
        // Claiming the name first makes the uniqueness check and the insert atomic
        match self.names.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                return Err(DatabaseError::ConstraintViolation {
                    context: format!("{} name '{name}' already exists", self.entity_type),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.rows.insert(
            id,
            Row {
                seq,
                item: value.clone(),
            },
        );
        Ok(value)
    }

    fn get(&self, id: Uuid) -> Result<T, DatabaseError> {
        self.rows
            .get(&id)
            .map(|row| row.item.clone())
            .ok_or_else(|| DatabaseError::NotFound {
                entity_type: self.entity_type,
                entity_id: id.to_string(),
            })
    }

    fn rows_matching(&self, predicate: impl Fn(&T) -> bool) -> Vec<Row<T>> {
        self.rows
            .iter()
            .filter(|row| predicate(&row.item))
            .map(|row| row.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

fn page<T>(rows: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    rows.into_iter().skip(offset).take(limit).collect()
}

/// In-memory catalog database
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone)]
pub struct InMemoryDatabase {
    flours: Arc<Table<Flour>>,
    recipes: Arc<Table<SourdoughRecipe>>,
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDatabase {
    /// Create an empty database
    #[must_use]
    pub fn new() -> Self {
        Self {
            flours: Arc::new(Table::new("flour")),
            recipes: Arc::new(Table::new("recipe")),
        }
    }
}

#[async_trait]
impl FlourRepository for InMemoryDatabase {
    async fn create_flour(&self, flour: Flour) -> Result<Flour, DatabaseError> {
        let name = flour.name.clone();
        self.flours.insert(flour.id, &name, flour)
    }

    async fn get_flour(&self, id: Uuid) -> Result<Flour, DatabaseError> {
        self.flours.get(id)
    }

    async fn list_flours(&self, offset: usize, limit: usize) -> Result<Vec<Flour>, DatabaseError> {
        let mut rows = self.flours.rows_matching(|_| true);
        rows.sort_by_key(|row| Reverse(row.seq));
        Ok(page(rows, offset, limit)
            .into_iter()
            .map(|row| row.item)
            .collect())
    }

    async fn search_flours(&self, name: &str) -> Result<Vec<Flour>, DatabaseError> {
        let query = name.to_lowercase();
        let mut rows = self
            .flours
            .rows_matching(|flour| flour.name.to_lowercase().contains(&query));
        rows.sort_by_key(|row| row.seq);
        Ok(rows.into_iter().map(|row| row.item).collect())
    }

    async fn count_flours(&self) -> Result<usize, DatabaseError> {
        Ok(self.flours.len())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryDatabase {
    async fn create_recipe(
        &self,
        recipe: SourdoughRecipe,
    ) -> Result<SourdoughRecipe, DatabaseError> {
        let name = recipe.name.clone();
        self.recipes.insert(recipe.id, &name, recipe)
    }

    async fn get_recipe(&self, id: Uuid) -> Result<SourdoughRecipe, DatabaseError> {
        self.recipes.get(id)
    }

    async fn list_recipes(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<SourdoughRecipe>, DatabaseError> {
        let mut rows = self.recipes.rows_matching(|_| true);
        rows.sort_by_key(|row| Reverse((row.item.created_at, row.seq)));
        Ok(page(rows, offset, limit)
            .into_iter()
            .map(|row| row.item)
            .collect())
    }

    async fn search_recipes(&self, name: &str) -> Result<Vec<SourdoughRecipe>, DatabaseError> {
        let mut rows = self.recipes.rows_matching(|recipe| recipe.name_matches(name));
        rows.sort_by_key(|row| row.seq);
        Ok(rows.into_iter().map(|row| row.item).collect())
    }

    async fn count_recipes(&self) -> Result<usize, DatabaseError> {
        Ok(self.recipes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_flour_name_rejected() {
        let db = InMemoryDatabase::new();
        db.create_flour(Flour::new("T65", "Bread flour")).await.unwrap();

        let error = db
            .create_flour(Flour::new("T80", "Bread flour"))
            .await
            .unwrap_err();
        assert!(matches!(error, DatabaseError::ConstraintViolation { .. }));
        assert_eq!(db.count_flours().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_flour_is_not_found() {
        let db = InMemoryDatabase::new();
        let error = db.get_flour(Uuid::new_v4()).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_flours_listed_newest_first() {
        let db = InMemoryDatabase::new();
        for name in ["Rye", "Spelt", "Einkorn"] {
            db.create_flour(Flour::new("whole", name)).await.unwrap();
        }

        let names: Vec<String> = db
            .list_flours(0, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|flour| flour.name)
            .collect();
        assert_eq!(names, vec!["Einkorn", "Spelt"]);

        let rest = db.list_flours(2, 10).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Rye");
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let db = InMemoryDatabase::new();
        let other = db.clone();
        let flour = db.create_flour(Flour::new("T65", "Bread flour")).await.unwrap();
        assert_eq!(other.get_flour(flour.id).await.unwrap(), flour);
    }
}
