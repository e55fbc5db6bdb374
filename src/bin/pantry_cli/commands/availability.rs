// ABOUTME: Recipe availability and shopping suggestion commands for pantry-cli
// ABOUTME: Loads a snapshot, scales the recipe, and prints reports or suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pantry_core::errors::AppResult;
use pantry_planner::config::PlannerConfig;
use pantry_planner::planning::{suggest_purchases, ScaleFactor, ShoppingOptions};
use pantry_planner::snapshot::InventorySnapshot;
use tracing::info;

use crate::helpers::display::{print_json, print_report_table, print_suggestions_table};
use crate::OutputFormat;

/// Print the availability of every recipe ingredient
pub fn check(snapshot_path: &Path, scale: f64, format: OutputFormat) -> AppResult<()> {
    let scale = ScaleFactor::new(scale)?;
    let snapshot = InventorySnapshot::from_path(snapshot_path)?;
    let report = snapshot.check_recipe(scale);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            print_report_table(&report);
            Ok(())
        }
    }
}

/// Print shopping suggestions for missing and short ingredients
pub fn shop(
    snapshot_path: &Path,
    scale: f64,
    no_partial: bool,
    format: OutputFormat,
) -> AppResult<()> {
    let scale = ScaleFactor::new(scale)?;
    let snapshot = InventorySnapshot::from_path(snapshot_path)?;
    let report = snapshot.check_recipe(scale);

    let mut options = ShoppingOptions::from_config(PlannerConfig::global());
    if no_partial {
        options.include_partial = false;
    }
    let suggestions = suggest_purchases(&report, &options);
    info!(suggestions = suggestions.len(), "Shopping suggestions built");

    match format {
        OutputFormat::Json => print_json(&suggestions),
        OutputFormat::Table => {
            print_suggestions_table(&suggestions);
            Ok(())
        }
    }
}
