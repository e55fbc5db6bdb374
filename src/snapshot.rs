// ABOUTME: Inventory snapshot loading for pantry, grocery, and recipe data
// ABOUTME: Parses the backend's camelCase JSON payload from strings or files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{IngredientRequirement, InventoryItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::planning::recipe::{check_recipe, RecipeAvailabilityReport, ScaleFactor};

/// Everything the matcher needs, fetched together
///
/// Any list missing from the document is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventorySnapshot {
    /// Pantry records
    pub pantry_items: Vec<InventoryItem>,
    /// Grocery list records
    pub grocery_items: Vec<InventoryItem>,
    /// Ingredient lines of the recipe being checked
    pub recipe_ingredients: Vec<IngredientRequirement>,
}

impl InventorySnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document is not a valid snapshot
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        debug!(
            pantry = snapshot.pantry_items.len(),
            grocery = snapshot.grocery_items.len(),
            ingredients = snapshot.recipe_ingredients.len(),
            "Loaded inventory snapshot"
        );
        Ok(snapshot)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the file cannot be read and
    /// `SerializationError` if its contents are not a valid snapshot
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!("cannot read snapshot {}: {e}", path.display()))
                .with_source(e)
        })?;
        Self::from_json_str(&contents)
    }

    /// Check the snapshot's recipe against its own inventory
    #[must_use]
    pub fn check_recipe(&self, scale: ScaleFactor) -> RecipeAvailabilityReport {
        check_recipe(
            &self.recipe_ingredients,
            scale,
            &self.pantry_items,
            &self.grocery_items,
        )
    }
}
