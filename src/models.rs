// ABOUTME: Re-exports the catalog domain models from dough-core
// ABOUTME: Flours, nutrition facts, sourdough recipes and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use dough_core::models::*;
