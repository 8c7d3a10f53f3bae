// ABOUTME: Core types and constants for the dough calculator workspace
// ABOUTME: Foundation crate with error handling, constants and catalog domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dough Core
//!
//! Foundation crate providing shared types and constants for the dough
//! calculator. It changes infrequently so dependents compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and storage errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Flours, nutrition facts and sourdough recipes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Catalog domain models (Flour, `SourdoughRecipe`, `BakerAmount`, etc.)
pub mod models;
