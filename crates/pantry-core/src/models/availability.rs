// ABOUTME: Availability outcome for one recipe ingredient against inventory
// ABOUTME: Carries the winning source, matched quantity, sufficiency, and shortfall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::inventory::InventorySource;

/// Badge state derived from an [`AvailabilityResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// Found with enough quantity
    InStock,
    /// Found, but not enough of it
    Partial,
    /// Not found in any inventory
    Missing,
}

/// Result of resolving one requirement against pantry and grocery inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    /// Inventory list that matched, or `None`
    pub source: InventorySource,
    /// Quantity on the matched item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<f64>,
    /// Unit on the matched item, as recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_unit: Option<String>,
    /// Whether the matched item covers the requirement
    pub is_sufficient: bool,
    /// Additional quantity needed, in the requirement's unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<f64>,
}

impl AvailabilityResult {
    /// Result for a requirement that matched nothing
    #[must_use]
    pub const fn missing(required_quantity: Option<f64>) -> Self {
        Self {
            source: InventorySource::None,
            available_quantity: None,
            available_unit: None,
            is_sufficient: false,
            shortfall: required_quantity,
        }
    }

    /// Badge state for this result
    #[must_use]
    pub const fn status(&self) -> AvailabilityStatus {
        match (self.source, self.is_sufficient) {
            (InventorySource::None, _) => AvailabilityStatus::Missing,
            (_, true) => AvailabilityStatus::InStock,
            (_, false) => AvailabilityStatus::Partial,
        }
    }

    /// Whether any inventory record matched
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !matches!(self.source, InventorySource::None)
    }
}
