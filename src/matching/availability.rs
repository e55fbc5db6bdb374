// ABOUTME: Resolves a recipe requirement against pantry then grocery inventory
// ABOUTME: First matching item wins; computes sufficiency and shortfall for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::models::{
    AvailabilityResult, IngredientRequirement, InventoryItem, InventorySource,
};
use tracing::debug;

use super::names::names_match;
use super::sufficiency::{is_sufficient, present_unit, units_compatible};
use super::units::unit_family;

/// Resolve where a requirement can be satisfied from
///
/// The pantry is scanned first, in order. If nothing there matches, the grocery
/// list is scanned. The first matching item decides the outcome; quantities from
/// several items are never combined.
///
/// Shortfall is reported in the requirement's unit:
/// - sufficient: none
/// - matched, comparable units: `max(0, required - available)`
/// - matched, unknown available amount or incompatible units: the full required amount
/// - no match: the full required amount (none if the recipe states no amount)
#[must_use]
pub fn resolve(
    requirement: &IngredientRequirement,
    pantry_items: &[InventoryItem],
    grocery_items: &[InventoryItem],
) -> AvailabilityResult {
    let matched = find_match(&requirement.name, pantry_items)
        .map(|item| (InventorySource::Pantry, item))
        .or_else(|| {
            find_match(&requirement.name, grocery_items).map(|item| (InventorySource::Grocery, item))
        });

    let Some((source, item)) = matched else {
        debug!(
            ingredient = %requirement.name,
            source = InventorySource::None.as_str(),
            "No inventory match"
        );
        return AvailabilityResult::missing(requirement.quantity);
    };

    let required_unit = requirement.unit.as_deref();
    let available_unit = item.unit.as_deref();
    let sufficient = is_sufficient(
        requirement.quantity,
        required_unit,
        item.quantity,
        available_unit,
    );
    let compatible = units_compatible(required_unit, available_unit);

    if !compatible {
        if let (Some(required), Some(available)) =
            (present_unit(required_unit), present_unit(available_unit))
        {
            debug!(
                ingredient = %requirement.name,
                required.unit = %required,
                required.family = %unit_family(required),
                available.unit = %available,
                available.family = %unit_family(available),
                "Incompatible units, treating as insufficient"
            );
        }
    }

    let shortfall = if sufficient {
        None
    } else {
        // Amounts in different units cannot be subtracted, so an incompatible
        // match is short by the whole requirement rather than by the difference
        requirement.quantity.map(|required| match item.quantity {
            Some(available) if compatible => (required - available).max(0.0),
            _ => required,
        })
    };

    debug!(
        ingredient = %requirement.name,
        matched = %item.name,
        source = source.as_str(),
        sufficient,
        "Resolved ingredient availability"
    );

    AvailabilityResult {
        source,
        available_quantity: item.quantity,
        available_unit: item.unit.clone(),
        is_sufficient: sufficient,
        shortfall,
    }
}

fn find_match<'a>(name: &str, items: &'a [InventoryItem]) -> Option<&'a InventoryItem> {
    items.iter().find(|item| names_match(name, &item.name))
}
