// ABOUTME: Integration tests for inventory snapshot loading
// ABOUTME: Tests camelCase parsing, null handling, file loading, and error codes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use pantry_core::errors::ErrorCode;
use pantry_core::models::InventorySource;
use pantry_planner::planning::ScaleFactor;
use pantry_planner::snapshot::InventorySnapshot;
use tempfile::{NamedTempFile, TempDir};

const SNAPSHOT_JSON: &str = r#"{
    "pantryItems": [
        {
            "id": "7f9c24e8-3b12-4c6f-9d6e-2a1b3c4d5e6f",
            "name": "Garlic",
            "quantity": 5,
            "unit": "cloves",
            "expiryDate": "2025-03-20"
        },
        { "name": "Olive oil", "quantity": null, "unit": null }
    ],
    "groceryItems": [
        { "name": "flour", "quantity": 200, "unit": "g" }
    ],
    "recipeIngredients": [
        { "name": "garlic", "quantity": 2, "unit": "cloves" },
        { "name": "flour", "quantity": 500, "unit": "grams" },
        { "name": "saffron", "quantity": 1, "unit": "pinch" },
        { "name": "olive oil" }
    ]
}"#;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_full_snapshot() {
    let snapshot = InventorySnapshot::from_json_str(SNAPSHOT_JSON).unwrap();

    assert_eq!(snapshot.pantry_items.len(), 2);
    assert_eq!(snapshot.grocery_items.len(), 1);
    assert_eq!(snapshot.recipe_ingredients.len(), 4);

    let garlic = &snapshot.pantry_items[0];
    assert!(garlic.id.is_some());
    assert_eq!(garlic.quantity, Some(5.0));
    assert_eq!(
        garlic.expiry_date,
        Some(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
    );

    let oil = &snapshot.pantry_items[1];
    assert_eq!(oil.quantity, None);
    assert_eq!(oil.unit, None);
    assert_eq!(snapshot.recipe_ingredients[3].quantity, None);
}

#[test]
fn test_missing_lists_default_to_empty() {
    let snapshot = InventorySnapshot::from_json_str(r#"{ "pantryItems": [] }"#).unwrap();

    assert!(snapshot.pantry_items.is_empty());
    assert!(snapshot.grocery_items.is_empty());
    assert!(snapshot.recipe_ingredients.is_empty());
    assert_eq!(snapshot, InventorySnapshot::default());
}

#[test]
fn test_malformed_snapshot_is_serialization_error() {
    let err = InventorySnapshot::from_json_str("{ \"pantryItems\": [ { } ] }").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    let err = InventorySnapshot::from_json_str("not json").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.source.is_some());
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT_JSON.as_bytes()).unwrap();

    let snapshot = InventorySnapshot::from_path(file.path()).unwrap();

    assert_eq!(snapshot.recipe_ingredients[0].name, "garlic");
}

#[test]
fn test_missing_file_is_internal_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = InventorySnapshot::from_path(&path).unwrap_err();

    assert_eq!(err.code, ErrorCode::InternalError);
    assert!(err.message.contains("absent.json"));
    assert!(err.source.is_some());
}

#[test]
fn test_invalid_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = InventorySnapshot::from_path(&path).unwrap_err();

    assert_eq!(err.code, ErrorCode::SerializationError);
}

// ============================================================================
// Checking the Snapshot Recipe
// ============================================================================

#[test]
fn test_snapshot_check_recipe() {
    let snapshot = InventorySnapshot::from_json_str(SNAPSHOT_JSON).unwrap();

    let report = snapshot.check_recipe(ScaleFactor::ONE);

    let sources: Vec<InventorySource> = report.items.iter().map(|l| l.result.source).collect();
    assert_eq!(
        sources,
        vec![
            InventorySource::Pantry,
            InventorySource::Grocery,
            InventorySource::None,
            InventorySource::Pantry,
        ]
    );
    assert_eq!(report.items[1].result.shortfall, Some(300.0));
    // Presence is enough when the recipe gives no amount
    assert!(report.items[3].result.is_sufficient);
    assert!(!report.can_cook());
}
