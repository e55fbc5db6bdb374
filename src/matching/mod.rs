// ABOUTME: Ingredient availability matching pipeline for pantry and grocery inventory
// ABOUTME: Normalizes names and units, then resolves each recipe line to a source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Matching Module
//!
//! Decides whether a recipe ingredient is already in the pantry, already on the
//! grocery list, or missing entirely. Every function here is pure and total: the
//! same snapshot always produces the same answer, and no input shape can make
//! them fail.
//!
//! ## Pipeline
//!
//! - **normalize**: lower-case, strip punctuation, collapse whitespace, drop stop words
//! - **names**: permissive word-level name matching with naive plural handling
//! - **units**: unit synonym canonicalization (no cross-family conversion)
//! - **sufficiency**: required vs available quantity comparison
//! - **availability**: pantry-first, grocery-second resolution with shortfall
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_planner::matching::resolve;
//! use pantry_core::models::{IngredientRequirement, InventoryItem, InventorySource};
//!
//! let requirement = IngredientRequirement::new("flour", 500.0, "g");
//! let groceries = vec![InventoryItem::new("flour", 200.0, "grams")];
//!
//! let result = resolve(&requirement, &[], &groceries);
//! assert_eq!(result.source, InventorySource::Grocery);
//! assert_eq!(result.shortfall, Some(300.0));
//! ```

/// Requirement resolution against pantry and grocery lists
pub mod availability;
/// Word-level ingredient name matching
pub mod names;
/// Text normalization and stop-word filtering
pub mod normalize;
/// Quantity sufficiency check
pub mod sufficiency;
/// Unit synonym canonicalization and unit families
pub mod units;

pub use availability::resolve;
pub use names::{names_match, words_equivalent};
pub use normalize::{normalize, significant_words};
pub use sufficiency::{is_sufficient, units_compatible};
pub use units::{normalize_unit, unit_family, UnitFamily};
