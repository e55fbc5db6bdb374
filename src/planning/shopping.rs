// ABOUTME: Shopping list suggestions derived from recipe availability reports
// ABOUTME: Suggests shortfall quantities and merges lines naming the same item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::constants::defaults;
use pantry_core::models::AvailabilityStatus;
use serde::{Deserialize, Serialize};

use super::recipe::RecipeAvailabilityReport;
use crate::config::PlannerConfig;
use crate::matching::normalize;
use crate::matching::units::normalize_unit;

/// Why an ingredient is on the shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    /// Not found in pantry or grocery list
    Missing,
    /// Found, but not enough of it
    Insufficient,
}

/// One line proposed for the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingSuggestion {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Amount to buy (the shortfall), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`, taken from the recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Why the line was suggested
    pub reason: SuggestionReason,
    /// Whether the line starts out checked
    pub preselected: bool,
}

/// Knobs for building suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingOptions {
    /// Suggest ingredients that were found but are short on quantity
    pub include_partial: bool,
}

impl Default for ShoppingOptions {
    fn default() -> Self {
        Self {
            include_partial: defaults::SHOPPING_INCLUDE_PARTIAL,
        }
    }
}

impl ShoppingOptions {
    /// Options taken from planner configuration
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            include_partial: config.shopping_include_partial,
        }
    }
}

/// Build shopping suggestions for every line the inventory does not cover
///
/// Lines whose normalized names and canonical units agree are merged into one
/// suggestion; quantities are summed, and an unknown quantity on either side
/// makes the merged quantity unknown. Output order follows the first appearance
/// of each merged line.
#[must_use]
pub fn suggest_purchases(
    report: &RecipeAvailabilityReport,
    options: &ShoppingOptions,
) -> Vec<ShoppingSuggestion> {
    let mut merged: Vec<(MergeKey, ShoppingSuggestion)> = Vec::new();

    for line in report.shortages() {
        let reason = match line.status() {
            AvailabilityStatus::Missing => SuggestionReason::Missing,
            AvailabilityStatus::Partial if options.include_partial => {
                SuggestionReason::Insufficient
            }
            AvailabilityStatus::Partial | AvailabilityStatus::InStock => continue,
        };

        let key = MergeKey::new(&line.requirement.name, line.requirement.unit.as_deref());
        let suggestion = ShoppingSuggestion {
            name: line.requirement.name.clone(),
            quantity: line.result.shortfall,
            unit: line.requirement.unit.clone(),
            reason,
            preselected: reason == SuggestionReason::Missing,
        };

        if let Some((_, existing)) = merged.iter_mut().find(|(k, _)| *k == key) {
            existing.absorb(&suggestion);
        } else {
            merged.push((key, suggestion));
        }
    }

    merged.into_iter().map(|(_, suggestion)| suggestion).collect()
}

#[derive(Debug, PartialEq, Eq)]
struct MergeKey {
    name: String,
    unit: Option<String>,
}

impl MergeKey {
    fn new(name: &str, unit: Option<&str>) -> Self {
        Self {
            name: normalize(name),
            unit: unit
                .filter(|u| !u.trim().is_empty())
                .map(normalize_unit),
        }
    }
}

impl ShoppingSuggestion {
    fn absorb(&mut self, other: &Self) {
        self.quantity = match (self.quantity, other.quantity) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        };
        if other.reason == SuggestionReason::Missing {
            self.reason = SuggestionReason::Missing;
        }
        self.preselected |= other.preselected;
    }
}
