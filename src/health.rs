// ABOUTME: Service health reporting for the scale cache and catalog storage
// ABOUTME: Aggregates component checks into an UP/DOWN health response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check utilities

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::cache::CacheProvider;
use crate::config::Environment;
use crate::constants::service_names;
use crate::database::RecipeRepository;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    /// Component is serving requests
    Up,
    /// Component cannot serve requests
    Down,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; `DOWN` if any component is down
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp
    pub timestamp: DateTime<Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Deployment environment
    pub environment: Environment,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
    /// Additional metadata
    pub metadata: Option<serde_json::Value>,
}

/// Health checker for the dough calculator
pub struct HealthChecker {
    start_time: Instant,
    environment: Environment,
    cache: Arc<dyn CacheProvider>,
    recipes: Arc<dyn RecipeRepository>,
}

impl HealthChecker {
    /// Create a new health checker
    #[must_use]
    pub fn new(
        environment: Environment,
        cache: Arc<dyn CacheProvider>,
        recipes: Arc<dyn RecipeRepository>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            cache,
            recipes,
        }
    }

    /// Check every component and aggregate the result
    pub async fn check(&self) -> HealthResponse {
        let started = Instant::now();
        let checks = vec![self.check_cache().await, self.check_storage().await];

        let status = if checks.iter().all(|check| check.status == HealthStatus::Up) {
            HealthStatus::Up
        } else {
            HealthStatus::Down
        };

        HealthResponse {
            status,
            service: ServiceInfo {
                name: service_names::DOUGH_CALCULATOR.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                environment: self.environment,
                uptime_seconds: self.start_time.elapsed().as_secs(),
            },
            checks,
            timestamp: Utc::now(),
            response_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    async fn check_cache(&self) -> ComponentHealth {
        let healthy = self.cache.health_check().await;
        let entries = self.cache.len().await;

        ComponentHealth {
            name: service_names::SCALE_CACHE.to_owned(),
            status: if healthy {
                HealthStatus::Up
            } else {
                HealthStatus::Down
            },
            message: if healthy {
                "Scale cache available".to_owned()
            } else {
                "Scale cache unavailable".to_owned()
            },
            metadata: Some(json!({ "entries": entries })),
        }
    }

    async fn check_storage(&self) -> ComponentHealth {
        match self.recipes.count_recipes().await {
            Ok(count) => ComponentHealth {
                name: service_names::STORAGE.to_owned(),
                status: HealthStatus::Up,
                message: "Catalog storage reachable".to_owned(),
                metadata: Some(json!({ "recipes": count })),
            },
            Err(e) => {
                warn!(error = %e, "Catalog storage health check failed");
                ComponentHealth {
                    name: service_names::STORAGE.to_owned(),
                    status: HealthStatus::Down,
                    message: format!("Catalog storage unavailable: {e}"),
                    metadata: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&HealthStatus::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&HealthStatus::Down).unwrap(), "\"DOWN\"");
    }
}
