// ABOUTME: Static lookup tables for ingredient name and unit matching
// ABOUTME: Stop words stripped from names and unit synonyms mapped to canonical codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Descriptive words that carry no identity for an ingredient.
///
/// "Fresh chopped tomatoes" and "tomato" name the same thing once these are gone.
pub const STOP_WORDS: &[&str] = &[
    // Preparation
    "chopped",
    "minced",
    "sliced",
    "diced",
    "ground",
    "grated",
    "shredded",
    "peeled",
    "finely",
    "roughly",
    "packed",
    // State
    "fresh",
    "dried",
    "raw",
    "cooked",
    "frozen",
    "canned",
    "ripe",
    "unripe",
    "whole",
    // Size
    "large",
    "small",
    "medium",
    // Quality
    "extra",
    "virgin",
    "organic",
    "light",
    "dark",
    "lean",
    // Meat and dairy variants
    "boneless",
    "skinless",
    "salted",
    "unsalted",
];

/// Unit synonyms and the canonical short code each maps to.
///
/// Lookup happens after lower-casing and trimming. Anything missing here passes
/// through unchanged.
pub const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("piece", "pcs"),
    ("pieces", "pcs"),
    ("pc", "pcs"),
    ("gram", "g"),
    ("grams", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
];

/// Canonical weight units
pub const WEIGHT_UNITS: &[&str] = &["g", "kg", "oz", "lb"];

/// Canonical volume units
pub const VOLUME_UNITS: &[&str] = &["ml", "l", "tsp", "tbsp", "cup"];

/// Canonical count units
pub const COUNT_UNITS: &[&str] = &["pcs"];

/// Plural suffixes accepted as equivalent when comparing words
pub const PLURAL_SUFFIXES: &[&str] = &["s", "es"];
