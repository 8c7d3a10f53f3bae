// ABOUTME: Re-exports application constants from dough-core
// ABOUTME: Cache defaults, baking conventions, catalog limits and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use dough_core::constants::*;
