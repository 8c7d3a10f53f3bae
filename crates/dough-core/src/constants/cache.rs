// ABOUTME: Scale cache constants for capacity, expiry, and cleanup intervals
// ABOUTME: Defaults keep scaled recipes for the life of the process unless configured otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum number of scaled recipes held in memory
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Default entry lifetime in seconds; zero means entries never expire
pub const DEFAULT_CACHE_TTL_SECS: u64 = 0;
