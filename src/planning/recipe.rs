// ABOUTME: Recipe scaling and whole-recipe availability reports
// ABOUTME: Scales every ingredient line, then resolves each against inventory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::{
    AvailabilityResult, AvailabilityStatus, IngredientRequirement, InventoryItem, InventorySource,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PlannerConfig;
use crate::matching::resolve;

/// Validated multiplier applied to recipe quantities
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The recipe as written
    pub const ONE: Self = Self(1.0);

    /// Validate a scale factor against the configured maximum
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for zero, negative, or non-finite factors and
    /// `ValueOutOfRange` above `PANTRY_MAX_SCALE_FACTOR`.
    pub fn new(value: f64) -> AppResult<Self> {
        Self::with_limit(value, PlannerConfig::global().max_scale_factor)
    }

    /// Validate a scale factor against an explicit maximum
    ///
    /// # Errors
    ///
    /// Same as [`ScaleFactor::new`].
    pub fn with_limit(value: f64, max: f64) -> AppResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "scale factor must be a positive number, got {value}"
            )));
        }
        if value > max {
            return Err(AppError::out_of_range(format!(
                "scale factor {value} exceeds the maximum of {max}"
            )));
        }
        Ok(Self(value))
    }

    /// Raw multiplier
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ONE
    }
}

/// One scaled recipe line and where it can be sourced from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAvailability {
    /// Requirement after scaling
    pub requirement: IngredientRequirement,
    /// Resolution against the inventory snapshot
    pub result: AvailabilityResult,
}

impl IngredientAvailability {
    /// Badge state for this line
    #[must_use]
    pub const fn status(&self) -> AvailabilityStatus {
        self.result.status()
    }
}

/// Counts across a recipe's availability results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    /// Lines matched in the pantry
    pub from_pantry: usize,
    /// Lines matched on the grocery list
    pub from_grocery: usize,
    /// Lines matched nowhere
    pub missing: usize,
    /// Lines matched but short on quantity
    pub insufficient: usize,
}

impl AvailabilitySummary {
    fn from_items(items: &[IngredientAvailability]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            match item.result.source {
                InventorySource::Pantry => acc.from_pantry += 1,
                InventorySource::Grocery => acc.from_grocery += 1,
                InventorySource::None => acc.missing += 1,
            }
            if item.status() == AvailabilityStatus::Partial {
                acc.insufficient += 1;
            }
            acc
        })
    }
}

/// Availability of every ingredient in a recipe at a given scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAvailabilityReport {
    /// Scale applied to every requirement
    pub scale_factor: ScaleFactor,
    /// One entry per recipe line, in recipe order
    pub items: Vec<IngredientAvailability>,
    /// Counts over `items`
    pub summary: AvailabilitySummary,
}

impl RecipeAvailabilityReport {
    /// Whether every line is covered by inventory
    #[must_use]
    pub fn can_cook(&self) -> bool {
        self.items.iter().all(|item| item.result.is_sufficient)
    }

    /// Lines that are not fully covered
    pub fn shortages(&self) -> impl Iterator<Item = &IngredientAvailability> {
        self.items.iter().filter(|item| !item.result.is_sufficient)
    }
}

/// Scale a recipe and resolve every line against the inventory snapshot
#[must_use]
pub fn check_recipe(
    requirements: &[IngredientRequirement],
    scale: ScaleFactor,
    pantry_items: &[InventoryItem],
    grocery_items: &[InventoryItem],
) -> RecipeAvailabilityReport {
    let items: Vec<IngredientAvailability> = requirements
        .iter()
        .map(|requirement| {
            let requirement = requirement.scaled(scale.value());
            let result = resolve(&requirement, pantry_items, grocery_items);
            IngredientAvailability {
                requirement,
                result,
            }
        })
        .collect();

    let summary = AvailabilitySummary::from_items(&items);

    info!(
        ingredients = items.len(),
        scale = scale.value(),
        from_pantry = summary.from_pantry,
        from_grocery = summary.from_grocery,
        missing = summary.missing,
        insufficient = summary.insufficient,
        "Recipe availability checked"
    );

    RecipeAvailabilityReport {
        scale_factor: scale,
        items,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_bounds() {
        assert!(ScaleFactor::with_limit(1.5, 10.0).is_ok());
        assert!(ScaleFactor::with_limit(0.0, 10.0).is_err());
        assert!(ScaleFactor::with_limit(-2.0, 10.0).is_err());
        assert!(ScaleFactor::with_limit(f64::NAN, 10.0).is_err());
        assert!(ScaleFactor::with_limit(11.0, 10.0).is_err());
    }
}
