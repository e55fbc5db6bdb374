// ABOUTME: Main library entry point for the pantry planner
// ABOUTME: Ingredient availability matching, shopping suggestions, and expiry calendars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Planner
//!
//! Client-side planning logic for a household meal planner. Given a snapshot of
//! the pantry, the grocery list and a recipe, it works out which ingredients are
//! already at home, which are already on the list, and what still needs buying.
//!
//! ## Architecture
//!
//! - **matching**: pure, total name/unit matching and availability resolution
//! - **planning**: recipe scaling, shopping suggestions, expiry calendar grids
//! - **snapshot**: loading the inventory payload fetched from the backend
//! - **config**: environment-driven planner settings
//! - **logging**: structured logging setup
//!
//! Shared models, constants and the error type live in the `pantry-core` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_planner::planning::{check_recipe, ScaleFactor};
//! use pantry_core::models::{IngredientRequirement, InventoryItem};
//!
//! let recipe = vec![IngredientRequirement::new("garlic", 2.0, "cloves")];
//! let pantry = vec![InventoryItem::new("Garlic", 5.0, "cloves")];
//!
//! let report = check_recipe(&recipe, ScaleFactor::ONE, &pantry, &[]);
//! assert!(report.can_cook());
//! ```

/// Environment-driven planner configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Ingredient name and quantity matching against inventory
pub mod matching;

/// Recipe reports, shopping suggestions, and expiry calendars
pub mod planning;

/// Inventory snapshot loading
pub mod snapshot;

pub use pantry_core::errors::{AppError, AppResult, ErrorCode};
pub use pantry_core::models;
