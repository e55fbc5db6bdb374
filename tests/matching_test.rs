// ABOUTME: Integration tests for ingredient name and unit matching
// ABOUTME: Tests normalization, stop words, the unified name policy, units, and sufficiency
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_planner::matching::{
    is_sufficient, names_match, normalize, normalize_unit, significant_words, unit_family,
    units_compatible, words_equivalent, UnitFamily,
};

const SAMPLE_TEXT: &[&str] = &[
    "",
    "   ",
    "Fresh Tomatoes",
    "  Extra-Virgin   Olive Oil!! ",
    "All-Purpose Flour (sifted)",
    "Crème fraîche",
    "2 x 400g tins\tchopped\ntomatoes",
    "ÀÉÎ 123 abc",
    "jalapeño",
];

// ============================================================================
// Text Normalizer Tests
// ============================================================================

#[test]
fn test_normalize_basic() {
    assert_eq!(normalize("Fresh Tomatoes"), "fresh tomatoes");
    assert_eq!(normalize("  Extra-Virgin   Olive Oil!! "), "extravirgin olive oil");
    assert_eq!(normalize("All-Purpose Flour"), "allpurpose flour");
    assert_eq!(normalize("2 x 400g tins"), "2 x 400g tins");
}

#[test]
fn test_normalize_empty_and_symbols() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t\n"), "");
    assert_eq!(normalize("!!! ??? ..."), "");
}

#[test]
fn test_normalize_is_idempotent() {
    for text in SAMPLE_TEXT {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
    }
}

#[test]
fn test_normalize_output_alphabet() {
    for text in SAMPLE_TEXT {
        let out = normalize(text);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
            "unexpected character in {out:?}"
        );
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
        assert!(!out.contains("  "));
    }
}

#[test]
fn test_normalize_drops_non_ascii_letters() {
    assert_eq!(normalize("jalapeño"), "jalapeo");
    assert_eq!(normalize("Crème fraîche"), "crme frache");
}

// ============================================================================
// Stop-Word Filter Tests
// ============================================================================

#[test]
fn test_significant_words_removes_descriptors() {
    assert_eq!(significant_words("Fresh Chopped Tomatoes"), vec!["tomatoes"]);
    assert_eq!(
        significant_words("Extra Virgin Olive Oil"),
        vec!["olive", "oil"]
    );
    assert_eq!(
        significant_words("boneless skinless chicken thighs"),
        vec!["chicken", "thighs"]
    );
    assert_eq!(significant_words("light brown sugar, packed"), vec!["brown", "sugar"]);
}

#[test]
fn test_significant_words_drops_single_characters() {
    assert_eq!(significant_words("2 x 400g tins"), vec!["400g", "tins"]);
}

#[test]
fn test_significant_words_empty() {
    assert!(significant_words("").is_empty());
    assert!(significant_words("fresh organic").is_empty());
}

#[test]
fn test_significant_words_keep_order() {
    assert_eq!(
        significant_words("red wine vinegar"),
        vec!["red", "wine", "vinegar"]
    );
}

// ============================================================================
// Word-Level Matcher Tests
// ============================================================================

#[test]
fn test_words_equivalent_plural_rule() {
    assert!(words_equivalent("tomato", "tomato"));
    assert!(words_equivalent("tomato", "tomatoes"));
    assert!(words_equivalent("eggs", "egg"));
    assert!(!words_equivalent("leaf", "leaves"));
    assert!(!words_equivalent("mouse", "mice"));
}

#[test]
fn test_names_match_stop_words_and_plurals() {
    assert!(names_match("Fresh Tomatoes", "tomato"));
    assert!(names_match("tomato", "Fresh Tomatoes"));
    assert!(names_match("Extra Virgin Olive Oil", "olive oil"));
}

#[test]
fn test_names_match_normalized_equality() {
    assert!(names_match("All-Purpose Flour", "allpurpose flour"));
    assert!(names_match("  GARLIC ", "garlic"));
}

#[test]
fn test_names_match_word_subset_policy() {
    // Either side may be the subset
    assert!(names_match("milk", "almond milk"));
    assert!(names_match("almond milk", "milk"));
    assert!(names_match("onion", "red onions"));
}

#[test]
fn test_names_match_rejects_partial_words() {
    assert!(!names_match("corn", "popcorn"));
    assert!(!names_match("popcorn", "corn"));
    assert!(!names_match("pea", "peanut butter"));
}

#[test]
fn test_names_match_requires_significant_words() {
    assert!(!names_match("fresh", "dried"));
    assert!(!names_match("organic", "tomato"));
}

#[test]
fn test_names_match_disjoint_words() {
    assert!(!names_match("chicken breast", "chicken thigh"));
    assert!(!names_match("butter", "milk"));
}

// ============================================================================
// Unit Normalizer Tests
// ============================================================================

#[test]
fn test_normalize_unit_table() {
    assert_eq!(normalize_unit("Tablespoons"), "tbsp");
    assert_eq!(normalize_unit("teaspoon"), "tsp");
    assert_eq!(normalize_unit("Pieces"), "pcs");
    assert_eq!(normalize_unit("kilograms"), "kg");
    assert_eq!(normalize_unit("millilitres"), "ml");
    assert_eq!(normalize_unit("ounces"), "oz");
    assert_eq!(normalize_unit("pound"), "lb");
    assert_eq!(normalize_unit("cups"), "cup");
}

#[test]
fn test_normalize_unit_passthrough() {
    assert_eq!(normalize_unit("exotic_unit"), "exotic_unit");
    assert_eq!(normalize_unit(" Cloves "), "cloves");
}

#[test]
fn test_unit_family_classification() {
    assert_eq!(unit_family("g"), UnitFamily::Weight);
    assert_eq!(unit_family("pounds"), UnitFamily::Weight);
    assert_eq!(unit_family("Tablespoon"), UnitFamily::Volume);
    assert_eq!(unit_family("pc"), UnitFamily::Count);
    assert_eq!(unit_family("cloves"), UnitFamily::Other);
    assert_eq!(UnitFamily::Volume.to_string(), "volume");
}

// ============================================================================
// Quantity Sufficiency Tests
// ============================================================================

#[test]
fn test_units_compatible() {
    assert!(units_compatible(Some("grams"), Some("g")));
    assert!(units_compatible(None, Some("g")));
    assert!(units_compatible(Some("cup"), None));
    assert!(units_compatible(Some("  "), Some("g")));
    assert!(!units_compatible(Some("cup"), Some("g")));
    // No conversion inside a family either
    assert!(!units_compatible(Some("kg"), Some("g")));
}

#[test]
fn test_is_sufficient_incompatible_units() {
    assert!(!is_sufficient(Some(2.0), Some("cup"), Some(500.0), Some("g")));
}

#[test]
fn test_is_sufficient_no_requirement() {
    assert!(is_sufficient(None, Some("g"), None, Some("cup")));
    assert!(is_sufficient(None, None, None, None));
}

#[test]
fn test_is_sufficient_unknown_available() {
    assert!(!is_sufficient(Some(1.0), Some("g"), None, Some("g")));
}

#[test]
fn test_is_sufficient_compares_amounts() {
    assert!(is_sufficient(Some(200.0), Some("grams"), Some(200.0), Some("g")));
    assert!(is_sufficient(Some(2.0), None, Some(3.0), Some("pcs")));
    assert!(!is_sufficient(Some(500.0), Some("g"), Some(200.0), Some("g")));
}
