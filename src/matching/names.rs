// ABOUTME: Permissive word-level matching between recipe and inventory item names
// ABOUTME: Treats naive plural suffixes as equivalent and ignores descriptive words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Name matching favours false positives over false negatives. A missed match
//! puts a duplicate item on the shopping list. A wrong match only marks something
//! as available that may not be.

use pantry_core::constants::matching::PLURAL_SUFFIXES;

use super::normalize::{normalize, significant_words};

/// Whether two normalized words name the same thing
///
/// Identical words match, as do pairs where one is the other plus a literal
/// `s` or `es` suffix. There is no stemming and no irregular plural table:
/// `"tomato"`/`"tomatoes"` match, `"leaf"`/`"leaves"` do not.
#[must_use]
pub fn words_equivalent(a: &str, b: &str) -> bool {
    a == b || is_plural_of(a, b) || is_plural_of(b, a)
}

fn is_plural_of(plural: &str, singular: &str) -> bool {
    plural
        .strip_prefix(singular)
        .is_some_and(|suffix| PLURAL_SUFFIXES.contains(&suffix))
}

fn covered_by(words: &[String], other: &[String]) -> bool {
    words
        .iter()
        .all(|word| other.iter().any(|candidate| words_equivalent(word, candidate)))
}

/// Whether a recipe ingredient name and an inventory item name refer to the same item
///
/// Returns true when the normalized names are equal. Otherwise both names must
/// keep at least one significant word, and every significant word on one side
/// must have an equivalent on the other side. Either side may be the subset, so
/// `"milk"` matches `"almond milk"` in both argument orders. Whole-string
/// substring containment is not used: `"corn"` does not match `"popcorn"`.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    if normalize(a) == normalize(b) {
        return true;
    }

    let words_a = significant_words(a);
    let words_b = significant_words(b);
    if words_a.is_empty() || words_b.is_empty() {
        return false;
    }

    covered_by(&words_a, &words_b) || covered_by(&words_b, &words_a)
}
