// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, output formats and service metadata for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup built on `tracing-subscriber`

use std::env;
use std::io;

use serde_json::json;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span enter/exit events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for CLI output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::DOUGH_CALCULATOR.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::DOUGH_CALCULATOR.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Logging configuration for a loaded server configuration
    ///
    /// The server's level applies unless `RUST_LOG` carries explicit filter directives.
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        let filter = env::var("RUST_LOG").ok();
        Self::from_env().with_server_config(config, filter)
    }

    fn with_server_config(mut self, config: &ServerConfig, filter: Option<String>) -> Self {
        self.level = filter.unwrap_or_else(|| config.log_level.to_string());
        self.environment = config.environment.to_string();
        self.include_location |= config.environment.is_production();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(env_filter);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;
        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Dough calculator starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });

        info!("Logging configured: {config_summary}");
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a completed scale request
    pub fn log_scale_request(
        recipe_id: Uuid,
        target_total_weight: u32,
        cache_hit: bool,
        duration_ms: u64,
    ) {
        info!(
            recipe.id = %recipe_id,
            scale.target_total_weight = target_total_weight,
            scale.cache_hit = cache_hit,
            scale.duration_ms = duration_ms,
            "Recipe scaled"
        );
    }

    /// Log catalog storage operations
    pub fn log_catalog_operation(operation: &str, entity: &str, success: bool, count: usize) {
        info!(
            catalog.operation = %operation,
            catalog.entity = %entity,
            catalog.success = success,
            catalog.count = count,
            "Catalog operation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, LogLevel};

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_service_name() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, service_names::DOUGH_CALCULATOR);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_server_config_drives_level_and_environment() {
        let server = ServerConfig {
            environment: Environment::Production,
            log_level: LogLevel::Warn,
            ..ServerConfig::default()
        };

        let config = LoggingConfig::default().with_server_config(&server, None);

        assert_eq!(config.level, "warn");
        assert_eq!(config.environment, "production");
        assert!(config.include_location);
    }

    #[test]
    fn test_filter_directives_take_precedence() {
        let server = ServerConfig {
            log_level: LogLevel::Error,
            ..ServerConfig::default()
        };

        let config = LoggingConfig::default()
            .with_server_config(&server, Some("dough_calculator=debug".to_owned()));

        assert_eq!(config.level, "dough_calculator=debug");
        assert_eq!(config.environment, "development");
        assert!(!config.include_location);
    }
}
