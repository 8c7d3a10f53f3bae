// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the sourdough catalog, grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Scale cache constants (capacity, expiry, cleanup)
pub mod cache;

/// Baker's percentage conventions
pub mod baking {
    /// Percentage carried by the aggregate flour line; every other line is relative to it
    pub const FLOUR_BAKER_PERCENTAGE: f64 = 100.0;

    /// Multiplier turning a flour ratio into a percentage
    pub const PERCENT: f64 = 100.0;
}

/// Catalog listing defaults
pub mod catalog {
    /// Page size used when the caller does not supply a limit
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    /// Largest page a single `find` call may return
    pub const MAX_PAGE_SIZE: usize = 100;
}

/// Service identifiers used in structured logs and health responses
pub mod service_names {
    /// Dough calculator service
    pub const DOUGH_CALCULATOR: &str = "dough-calculator";
    /// Scale cache component
    pub const SCALE_CACHE: &str = "scale_cache";
    /// Storage component
    pub const STORAGE: &str = "storage";
}
