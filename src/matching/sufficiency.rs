// ABOUTME: Quantity sufficiency check between a requirement and an inventory item
// ABOUTME: Compares amounts only when both units canonicalize to the same code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::units::normalize_unit;

/// Treat empty or whitespace-only units as absent
pub(crate) fn present_unit(unit: Option<&str>) -> Option<&str> {
    unit.filter(|u| !u.trim().is_empty())
}

/// Whether two units can be compared directly
///
/// True when either unit is absent, or both canonicalize to the same code.
/// `"cup"` and `"g"` are never compatible.
#[must_use]
pub fn units_compatible(required_unit: Option<&str>, available_unit: Option<&str>) -> bool {
    match (present_unit(required_unit), present_unit(available_unit)) {
        (Some(required), Some(available)) => normalize_unit(required) == normalize_unit(available),
        _ => true,
    }
}

/// Whether the available quantity covers the required quantity
///
/// - No required quantity: presence alone is enough.
/// - Required but unknown available quantity: not enough.
/// - Compatible units: `available >= required`.
/// - Incompatible units: not enough, since no conversion is attempted.
#[must_use]
pub fn is_sufficient(
    required_quantity: Option<f64>,
    required_unit: Option<&str>,
    available_quantity: Option<f64>,
    available_unit: Option<&str>,
) -> bool {
    let Some(required) = required_quantity else {
        return true;
    };
    let Some(available) = available_quantity else {
        return false;
    };

    units_compatible(required_unit, available_unit) && available >= required
}
