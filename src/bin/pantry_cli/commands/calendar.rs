// ABOUTME: Expiry calendar command for pantry-cli
// ABOUTME: Renders a month grid of pantry expirations and the upcoming list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::{Local, NaiveDate};
use pantry_core::errors::AppResult;
use pantry_planner::config::PlannerConfig;
use pantry_planner::planning::{build_month, upcoming_expirations, CalendarOptions};
use pantry_planner::snapshot::InventorySnapshot;
use serde_json::json;

use crate::helpers::display::{print_calendar, print_json, print_upcoming};
use crate::OutputFormat;

/// Print the expiry calendar for one month
pub fn show(
    snapshot_path: &Path,
    year: i32,
    month: u32,
    today: Option<NaiveDate>,
    within_days: i64,
    format: OutputFormat,
) -> AppResult<()> {
    let snapshot = InventorySnapshot::from_path(snapshot_path)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let options = CalendarOptions::from_config(PlannerConfig::global());

    let calendar = build_month(year, month, &snapshot.pantry_items, today, &options)?;
    let upcoming = upcoming_expirations(&snapshot.pantry_items, today, within_days, &options);

    match format {
        OutputFormat::Json => print_json(&json!({
            "calendar": calendar,
            "upcoming": upcoming,
        })),
        OutputFormat::Table => {
            print_calendar(&calendar);
            print_upcoming(&upcoming, within_days);
            Ok(())
        }
    }
}
