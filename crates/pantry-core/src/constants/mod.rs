// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for matching tables, environment keys, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Stop words and unit synonyms used by ingredient matching
pub mod matching;

/// Environment variable names
pub mod env_config {
    /// Days ahead of expiry that count as "expiring soon"
    pub const EXPIRY_SOON_DAYS: &str = "PANTRY_EXPIRY_SOON_DAYS";
    /// First day of the week in calendar grids (`sunday` or `monday`)
    pub const WEEK_START: &str = "PANTRY_WEEK_START";
    /// Upper bound accepted for recipe scale factors
    pub const MAX_SCALE_FACTOR: &str = "PANTRY_MAX_SCALE_FACTOR";
    /// Whether partially available ingredients go on the shopping list
    pub const SHOPPING_INCLUDE_PARTIAL: &str = "PANTRY_SHOPPING_INCLUDE_PARTIAL";
}

/// Default configuration values
pub mod defaults {
    /// Items expiring within this many days are flagged
    pub const EXPIRY_SOON_DAYS: i64 = 3;
    /// Largest scale factor accepted by default
    pub const MAX_SCALE_FACTOR: f64 = 100.0;
    /// Partially available ingredients are suggested by default
    pub const SHOPPING_INCLUDE_PARTIAL: bool = true;
    /// Look-ahead window for upcoming expirations
    pub const UPCOMING_EXPIRY_WINDOW_DAYS: i64 = 7;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const PANTRY_PLANNER: &str = "pantry-planner";
}
