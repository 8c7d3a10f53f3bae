// ABOUTME: Flour catalog service for creation, lookup, listing and search
// ABOUTME: Maps storage errors to FlourNotFound and other AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::config::CatalogConfig;
use crate::database::FlourRepository;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{CreateFlourRequest, Flour};

/// Catalog operations on flours
#[derive(Clone)]
pub struct FlourService {
    repository: Arc<dyn FlourRepository>,
    catalog: CatalogConfig,
}

impl FlourService {
    /// Create a service over the given storage collaborator
    #[must_use]
    pub fn new(repository: Arc<dyn FlourRepository>, catalog: CatalogConfig) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Add a flour to the catalog with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when a flour with the same name exists
    pub async fn create(&self, request: CreateFlourRequest) -> AppResult<Flour> {
        let name = request.name.clone();
        let created = self
            .repository
            .create_flour(request.into_flour())
            .await
            .map_err(|e| {
                error!(error = %e, name = %name, "Failed to create flour");
                AppError::from(e)
            })?;

        info!(flour_id = %created.id, name = %created.name, "Created flour");
        Ok(created)
    }

    /// Fetch a flour by id
    ///
    /// # Errors
    ///
    /// Returns `FlourNotFound` when no flour has this id
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Flour> {
        self.repository.get_flour(id).await.map_err(|e| {
            if e.is_not_found() {
                AppError::flour_not_found(format!("flour with id {id} not found")).with_source(e)
            } else {
                error!(flour_id = %id, error = %e, "Failed to find flour by id");
                e.into()
            }
        })
    }

    /// List flours newest first; `limit` is clamped by the catalog configuration
    ///
    /// # Errors
    ///
    /// Returns a database error when storage fails
    pub async fn find(&self, offset: usize, limit: usize) -> AppResult<Vec<Flour>> {
        let limit = self.catalog.clamp_limit(limit);
        let flours = self
            .repository
            .list_flours(offset, limit)
            .await
            .map_err(|e| {
                error!(error = %e, offset, limit, "Failed to find flours");
                AppError::from(e)
            })?;

        AppLogger::log_catalog_operation("find", "flour", true, flours.len());
        Ok(flours)
    }

    /// Case-insensitive search on the flour name
    ///
    /// # Errors
    ///
    /// Returns a database error when storage fails
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<Flour>> {
        let flours = self.repository.search_flours(name).await.map_err(|e| {
            error!(error = %e, name, "Failed to search flours by name");
            AppError::from(e)
        })?;

        AppLogger::log_catalog_operation("search", "flour", true, flours.len());
        Ok(flours)
    }
}
