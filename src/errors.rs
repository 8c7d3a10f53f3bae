// ABOUTME: Re-exports the unified error system from dough-core
// ABOUTME: Keeps crate::errors paths stable for the service layer and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use dough_core::errors::*;
