// ABOUTME: Main library entry point for the dough calculator catalog service
// ABOUTME: Wires configuration, logging, storage, the scale cache and catalog services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dough Calculator
//!
//! A catalog service for bread-baking recipes. It stores flours and sourdough
//! formulas, derives baker's-percentage summaries when a recipe is created, and
//! rescales stored recipes to any target dough weight.
//!
//! ## Architecture
//!
//! - **`dough-core`**: errors, constants and domain models (re-exported here)
//! - **`dough-intelligence`**: the pure calculator and scaling math
//! - **Services**: flour and recipe catalogs, and the memoizing scaling engine
//! - **Cache**: bounded LRU scale cache behind the [`cache::CacheProvider`] trait
//! - **Database**: repository traits with an in-memory implementation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use dough_calculator::cache::factory::Cache;
//! use dough_calculator::config::ServerConfig;
//! use dough_calculator::database::InMemoryDatabase;
//! use dough_calculator::errors::AppResult;
//! use dough_calculator::services::{RecipeScaleService, SourdoughRecipeService};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Arc::new(InMemoryDatabase::new());
//!     let recipes = Arc::new(SourdoughRecipeService::new(database, config.catalog));
//!     let engine = RecipeScaleService::new(recipes, Arc::new(Cache::new(&config.cache)));
//!
//!     let scaled = engine.scale(Uuid::new_v4(), 985).await?;
//!     println!("{}", scaled.details.total_weight);
//!     Ok(())
//! }
//! ```

/// Scale cache abstraction and in-memory backend
pub mod cache;

/// Server configuration from YAML and environment variables
pub mod config;

/// Application constants (re-exported from `dough-core`)
pub mod constants;

/// Storage collaborator traits and in-memory implementation
pub mod database;

/// Unified error handling (re-exported from `dough-core`)
pub mod errors;

/// Health reporting for the cache and storage components
pub mod health;

/// Structured logging setup
pub mod logging;

/// Domain models (re-exported from `dough-core`)
pub mod models;

/// Catalog services and the recipe scaling engine
pub mod services;
