// ABOUTME: Server configuration loaded from an optional YAML file and environment overrides
// ABOUTME: Defines ServerConfig and CatalogConfig with validation and a human-readable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::types::{Environment, LogLevel};
use crate::cache::CacheConfig;
use crate::constants::catalog::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Catalog listing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Page size used when a caller asks for zero items
    pub default_page_size: usize,
    /// Upper bound for any single page
    pub max_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Clamp a requested page size: zero means "default", anything above the maximum is capped
    #[must_use]
    pub fn clamp_limit(&self, requested: usize) -> usize {
        if requested == 0 {
            self.default_page_size
        } else {
            requested.min(self.max_page_size)
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Scale cache settings
    pub cache: CacheConfig,
    /// Catalog listing settings
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration: YAML file named by `CONFIG_PATH` (if set), then environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!(path = %path, "Loading configuration file");
                Self::from_file(&path)?
            }
            Err(_) => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a YAML file without applying environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Failed to read configuration file {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Overlay values from environment variables; unparsable values are ignored with a warning
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("ENVIRONMENT") {
            self.environment = Environment::from_str_or_default(&value);
        }
        if let Ok(value) = env::var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str_or_default(&value);
        }

        parse_env("SCALE_CACHE_MAX_ENTRIES", &mut self.cache.max_entries);
        parse_env(
            "SCALE_CACHE_CLEANUP_INTERVAL_SECS",
            &mut self.cache.cleanup_interval_secs,
        );
        let mut ttl_secs = self.cache.ttl_secs.unwrap_or(0);
        if parse_env("SCALE_CACHE_TTL_SECS", &mut ttl_secs) {
            self.cache.ttl_secs = (ttl_secs > 0).then_some(ttl_secs);
        }

        parse_env(
            "CATALOG_DEFAULT_PAGE_SIZE",
            &mut self.catalog.default_page_size,
        );
        parse_env("CATALOG_MAX_PAGE_SIZE", &mut self.catalog.max_page_size);
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a page size is zero or the maximum page size is smaller
    /// than the default page size
    pub fn validate(&self) -> AppResult<()> {
        if self.catalog.default_page_size == 0 || self.catalog.max_page_size == 0 {
            return Err(AppError::config_invalid(
                "catalog page sizes must be greater than zero",
            ));
        }

        if self.catalog.max_page_size < self.catalog.default_page_size {
            return Err(AppError::config_invalid(format!(
                "catalog max_page_size ({}) is smaller than default_page_size ({})",
                self.catalog.max_page_size, self.catalog.default_page_size
            )));
        }

        if self.cache.enable_background_cleanup
            && self.cache.ttl().is_some()
            && self.cache.cleanup_interval_secs == 0
        {
            return Err(AppError::config_invalid(
                "cache cleanup_interval_secs must be greater than zero when entries expire",
            ));
        }

        if self.cache.max_entries == 0 {
            warn!("SCALE_CACHE_MAX_ENTRIES is zero; the default capacity will be used");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Dough Calculator Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Scale Cache Capacity: {}\n\
             - Scale Cache TTL: {}\n\
             - Catalog Page Size: {} (max {})",
            self.environment,
            self.log_level,
            self.cache.max_entries,
            self.cache
                .ttl()
                .map_or_else(|| "never expires".to_owned(), |ttl| format!("{}s", ttl.as_secs())),
            self.catalog.default_page_size,
            self.catalog.max_page_size,
        )
    }
}

/// Parse an environment variable into `target`, returning whether it was applied
fn parse_env<T: FromStr>(key: &str, target: &mut T) -> bool {
    let Ok(value) = env::var(key) else {
        return false;
    };

    value.trim().parse::<T>().map_or_else(
        |_| {
            warn!(key, value = %value, "Ignoring unparsable configuration value");
            false
        },
        |parsed| {
            *target = parsed;
            true
        },
    )
}
