// ABOUTME: Core data models shared by the matcher, planners, and CLI
// ABOUTME: Re-exports requirement, inventory, and availability types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Availability outcome for a single recipe ingredient
pub mod availability;
/// Recipe requirements and inventory records
pub mod inventory;

pub use availability::{AvailabilityResult, AvailabilityStatus};
pub use inventory::{IngredientRequirement, InventoryItem, InventorySource};
