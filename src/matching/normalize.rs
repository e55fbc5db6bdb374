// ABOUTME: Text normalization and stop-word filtering for ingredient names
// ABOUTME: Produces lowercase alphanumeric text and the significant words within it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::sync::LazyLock;

use pantry_core::constants::matching::STOP_WORDS;

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Normalize free text for comparison
///
/// Lower-cases the input, removes every character outside `[a-z0-9]` and
/// whitespace, collapses whitespace runs to a single space and trims. Removed
/// characters leave no gap: `"all-purpose"` becomes `"allpurpose"`.
///
/// The function is idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Whether `word` is a descriptive adjective ignored during matching
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Significant words of `text`, in their original order
///
/// Normalizes, splits on spaces, and drops single-character tokens and stop words.
#[must_use]
pub fn significant_words(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|word| word.len() > 1 && !is_stop_word(word))
        .map(str::to_owned)
        .collect()
}
