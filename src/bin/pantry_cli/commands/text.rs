// ABOUTME: Text inspection command for pantry-cli
// ABOUTME: Shows how ingredient names are normalized before matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_core::errors::AppResult;
use pantry_planner::matching::{normalize as normalize_text, significant_words};
use serde_json::json;

use crate::helpers::display::print_json;
use crate::OutputFormat;

/// Print the normalized text and significant words
pub fn normalize(text: &str, format: OutputFormat) -> AppResult<()> {
    let normalized = normalize_text(text);
    let words = significant_words(text);

    match format {
        OutputFormat::Json => print_json(&json!({
            "input": text,
            "normalized": normalized,
            "significantWords": words,
        })),
        OutputFormat::Table => {
            println!("Input:             {text}");
            println!("Normalized:        {normalized}");
            if words.is_empty() {
                println!("Significant words: (none, cannot match on descriptors alone)");
            } else {
                println!("Significant words: {}", words.join(", "));
            }
            Ok(())
        }
    }
}
