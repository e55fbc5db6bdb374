// ABOUTME: Configuration management module for planner settings
// ABOUTME: Environment-driven settings for calendars, scaling limits, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration comes from environment variables with the `PANTRY_` prefix.
//! The matching tables (stop words, unit synonyms) are compiled in and are not
//! configurable.

/// Configuration error types
pub mod error;
/// Planner configuration and its environment overrides
pub mod planner;

pub use error::ConfigError;
pub use planner::{PlannerConfig, WeekStart};
