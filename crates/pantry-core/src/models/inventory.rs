// ABOUTME: Recipe ingredient requirements and pantry/grocery inventory records
// ABOUTME: Optional quantity and unit fields are modeled explicitly with Option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which inventory list satisfied a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventorySource {
    /// Found in the household pantry
    Pantry,
    /// Found on the current grocery list
    Grocery,
    /// Not found anywhere
    None,
}

impl InventorySource {
    /// Lowercase label used in logs and tables
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pantry => "pantry",
            Self::Grocery => "grocery",
            Self::None => "none",
        }
    }
}

/// One line of a recipe: what is needed and how much
///
/// A missing `quantity` means "any amount will do". That is different from
/// a quantity of zero and is preserved through scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequirement {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Required amount, if the recipe states one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl IngredientRequirement {
    /// Requirement with a quantity and unit
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: Some(unit.into()),
        }
    }

    /// Requirement with no stated amount ("salt to taste")
    #[must_use]
    pub fn unquantified(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Requirement with a bare count and no unit ("3 eggs")
    #[must_use]
    pub fn counted(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: None,
        }
    }

    /// Copy of this requirement with the quantity multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity.map(|q| q * factor),
            unit: self.unit.clone(),
        }
    }
}

/// A pantry or grocery record as delivered by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Backend identifier, when the record has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Item name
    pub name: String,
    /// Amount on hand, if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Best-before date (pantry items only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryItem {
    /// Item with a tracked quantity and unit
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity: Some(quantity),
            unit: Some(unit.into()),
            expiry_date: None,
        }
    }

    /// Item whose quantity is not tracked
    #[must_use]
    pub fn untracked(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity: None,
            unit: None,
            expiry_date: None,
        }
    }

    /// Set the best-before date
    #[must_use]
    pub const fn with_expiry(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    /// Set the backend identifier
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}
