// ABOUTME: Configuration management module for the dough calculator
// ABOUTME: Loads server settings from YAML and environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: [`ServerConfig`] loaded from the file named by `CONFIG_PATH`
//!   and overridden by environment variables
//! - **Types**: lenient [`Environment`] and [`LogLevel`] enums

/// Server configuration loading and validation
pub mod environment;
/// Environment and log level types
pub mod types;

pub use environment::{CatalogConfig, ServerConfig, CONFIG_PATH_ENV};
pub use types::{Environment, LogLevel};

pub use crate::cache::CacheConfig;
