// ABOUTME: Unit synonym canonicalization for recipe and inventory quantities
// ABOUTME: Maps spelled-out units to short codes and classifies them by family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use pantry_core::constants::matching::{COUNT_UNITS, UNIT_SYNONYMS, VOLUME_UNITS, WEIGHT_UNITS};

static UNIT_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_SYNONYMS.iter().copied().collect());

/// Canonical short code for a unit
///
/// Lower-cases and trims, then looks the unit up in the synonym table.
/// Unknown units come back lower-cased and trimmed but otherwise unchanged.
///
/// ```rust
/// use pantry_planner::matching::normalize_unit;
///
/// assert_eq!(normalize_unit("Tablespoons"), "tbsp");
/// assert_eq!(normalize_unit("exotic_unit"), "exotic_unit");
/// ```
#[must_use]
pub fn normalize_unit(unit: &str) -> String {
    let cleaned = unit.trim().to_lowercase();
    UNIT_TABLE
        .get(cleaned.as_str())
        .map_or(cleaned, |canonical| (*canonical).to_owned())
}

/// Measurement family of a unit
///
/// Families are reported for diagnostics only; quantities are never converted
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    /// Mass units (g, kg, oz, lb)
    Weight,
    /// Volume units (ml, l, tsp, tbsp, cup)
    Volume,
    /// Whole items (pcs)
    Count,
    /// Anything the synonym table does not know ("cloves", "pinch")
    Other,
}

impl Display for UnitFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Weight => "weight",
            Self::Volume => "volume",
            Self::Count => "count",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Family of a unit, after canonicalization
#[must_use]
pub fn unit_family(unit: &str) -> UnitFamily {
    let canonical = normalize_unit(unit);
    let canonical = canonical.as_str();
    if WEIGHT_UNITS.contains(&canonical) {
        UnitFamily::Weight
    } else if VOLUME_UNITS.contains(&canonical) {
        UnitFamily::Volume
    } else if COUNT_UNITS.contains(&canonical) {
        UnitFamily::Count
    } else {
        UnitFamily::Other
    }
}
