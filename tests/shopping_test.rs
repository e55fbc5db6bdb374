// ABOUTME: Integration tests for shopping list suggestions
// ABOUTME: Tests reasons, preselection, partial filtering, and line merging
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::models::{IngredientRequirement, InventoryItem};
use pantry_planner::planning::{
    check_recipe, suggest_purchases, RecipeAvailabilityReport, ScaleFactor, ShoppingOptions,
    SuggestionReason,
};

fn report_for(
    recipe: &[IngredientRequirement],
    pantry: &[InventoryItem],
    groceries: &[InventoryItem],
) -> RecipeAvailabilityReport {
    check_recipe(recipe, ScaleFactor::ONE, pantry, groceries)
}

fn requirement(name: &str, quantity: Option<f64>, unit: Option<&str>) -> IngredientRequirement {
    IngredientRequirement {
        name: name.to_owned(),
        quantity,
        unit: unit.map(str::to_owned),
    }
}

// ============================================================================
// Suggestion Content
// ============================================================================

#[test]
fn test_missing_and_partial_lines_suggested() {
    let recipe = vec![
        IngredientRequirement::new("garlic", 2.0, "cloves"),
        IngredientRequirement::new("flour", 500.0, "g"),
        IngredientRequirement::new("saffron", 1.0, "pinch"),
    ];
    let pantry = vec![InventoryItem::new("garlic", 5.0, "cloves")];
    let groceries = vec![InventoryItem::new("flour", 200.0, "g")];

    let report = report_for(&recipe, &pantry, &groceries);
    let suggestions = suggest_purchases(&report, &ShoppingOptions::default());

    assert_eq!(suggestions.len(), 2);

    let flour = &suggestions[0];
    assert_eq!(flour.name, "flour");
    assert_eq!(flour.quantity, Some(300.0));
    assert_eq!(flour.unit.as_deref(), Some("g"));
    assert_eq!(flour.reason, SuggestionReason::Insufficient);
    assert!(!flour.preselected);

    let saffron = &suggestions[1];
    assert_eq!(saffron.name, "saffron");
    assert_eq!(saffron.quantity, Some(1.0));
    assert_eq!(saffron.reason, SuggestionReason::Missing);
    assert!(saffron.preselected);
}

#[test]
fn test_partial_lines_can_be_excluded() {
    let recipe = vec![
        IngredientRequirement::new("flour", 500.0, "g"),
        IngredientRequirement::new("saffron", 1.0, "pinch"),
    ];
    let groceries = vec![InventoryItem::new("flour", 200.0, "g")];

    let report = report_for(&recipe, &[], &groceries);
    let options = ShoppingOptions {
        include_partial: false,
    };
    let suggestions = suggest_purchases(&report, &options);

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "saffron");
}

#[test]
fn test_nothing_suggested_when_everything_is_at_hand() {
    let recipe = vec![IngredientRequirement::new("rice", 200.0, "g")];
    let pantry = vec![InventoryItem::new("rice", 1.0, "kg")];
    let groceries = vec![InventoryItem::new("rice", 500.0, "grams")];

    // Pantry wins, and kg vs g cannot be compared
    let report = report_for(&recipe, &pantry, &groceries);
    assert_eq!(suggest_purchases(&report, &ShoppingOptions::default()).len(), 1);

    let report = report_for(&recipe, &[], &groceries);
    assert!(suggest_purchases(&report, &ShoppingOptions::default()).is_empty());
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_same_name_and_unit_lines_merge() {
    let recipe = vec![
        IngredientRequirement::new("eggs", 2.0, "pcs"),
        IngredientRequirement::new("sugar", 100.0, "g"),
        IngredientRequirement::new("Eggs!", 1.0, "pieces"),
    ];

    let report = report_for(&recipe, &[], &[]);
    let suggestions = suggest_purchases(&report, &ShoppingOptions::default());

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].name, "eggs");
    assert_eq!(suggestions[0].quantity, Some(3.0));
    assert_eq!(suggestions[0].unit.as_deref(), Some("pcs"));
    assert!(suggestions[0].preselected);
    assert_eq!(suggestions[1].name, "sugar");
}

#[test]
fn test_different_units_stay_separate() {
    let recipe = vec![
        IngredientRequirement::new("milk", 1.0, "cup"),
        IngredientRequirement::new("milk", 200.0, "ml"),
    ];

    let report = report_for(&recipe, &[], &[]);
    let suggestions = suggest_purchases(&report, &ShoppingOptions::default());

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].unit.as_deref(), Some("cup"));
    assert_eq!(suggestions[1].unit.as_deref(), Some("ml"));
}

#[test]
fn test_unknown_quantity_absorbs_merge() {
    let recipe = vec![
        requirement("salt", Some(1.0), Some("tsp")),
        requirement("salt", None, Some("teaspoon")),
    ];

    let report = report_for(&recipe, &[], &[]);
    let suggestions = suggest_purchases(&report, &ShoppingOptions::default());

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].quantity, None);
    assert_eq!(suggestions[0].reason, SuggestionReason::Missing);
}

#[test]
fn test_suggestions_serialize_camel_case() {
    let recipe = vec![IngredientRequirement::new("saffron", 1.0, "pinch")];

    let report = report_for(&recipe, &[], &[]);
    let suggestions = suggest_purchases(&report, &ShoppingOptions::default());
    let json = serde_json::to_value(&suggestions).unwrap();

    assert_eq!(json[0]["name"], "saffron");
    assert_eq!(json[0]["reason"], "missing");
    assert_eq!(json[0]["preselected"], true);
}
