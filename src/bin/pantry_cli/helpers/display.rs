// ABOUTME: Output formatting helpers for pantry-cli
// ABOUTME: Provides table and JSON rendering for reports, suggestions, and calendars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Weekday};
use pantry_core::errors::AppResult;
use pantry_core::models::AvailabilityStatus;
use pantry_planner::config::WeekStart;
use pantry_planner::matching::{unit_family, units_compatible};
use pantry_planner::planning::{
    CalendarMonth, ExpiringItem, ExpiryStatus, IngredientAvailability, RecipeAvailabilityReport,
    ShoppingSuggestion, SuggestionReason,
};
use serde::Serialize;

const RULE_WIDTH: usize = 80;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional amount with its unit, trimming needless decimals
fn format_amount(quantity: Option<f64>, unit: Option<&str>) -> String {
    let Some(quantity) = quantity else {
        return "-".to_owned();
    };
    let rounded = format!("{quantity:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match unit.filter(|u| !u.trim().is_empty()) {
        Some(unit) => format!("{trimmed} {unit}"),
        None => trimmed.to_owned(),
    }
}

const fn status_label(status: AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::InStock => "in stock",
        AvailabilityStatus::Partial => "partial",
        AvailabilityStatus::Missing => "missing",
    }
}

fn unit_note(line: &IngredientAvailability) -> Option<String> {
    let required = line.requirement.unit.as_deref()?;
    let available = line.result.available_unit.as_deref()?;
    if units_compatible(Some(required), Some(available)) {
        return None;
    }
    Some(format!(
        "units differ ({} vs {})",
        unit_family(required),
        unit_family(available)
    ))
}

/// Print a recipe availability report as a table
pub fn print_report_table(report: &RecipeAvailabilityReport) {
    println!(
        "\nRecipe availability (scale x{})",
        format_amount(Some(report.scale_factor.value()), None)
    );
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{:<24} {:>12} {:<8} {:>12} {:<9} {:>10}",
        "INGREDIENT", "NEED", "SOURCE", "HAVE", "STATUS", "SHORT"
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for line in &report.items {
        let requirement = &line.requirement;
        let result = &line.result;
        println!(
            "{:<24} {:>12} {:<8} {:>12} {:<9} {:>10}",
            requirement.name,
            format_amount(requirement.quantity, requirement.unit.as_deref()),
            result.source.as_str(),
            format_amount(result.available_quantity, result.available_unit.as_deref()),
            status_label(line.status()),
            format_amount(result.shortfall, None),
        );
        if let Some(note) = unit_note(line) {
            println!("  note: {note}");
        }
    }

    let summary = &report.summary;
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "pantry: {}  grocery: {}  missing: {}  short: {}",
        summary.from_pantry, summary.from_grocery, summary.missing, summary.insufficient
    );
    if report.can_cook() {
        println!("Everything needed is at hand.");
    }
}

/// Print shopping suggestions as a checklist
pub fn print_suggestions_table(suggestions: &[ShoppingSuggestion]) {
    if suggestions.is_empty() {
        println!("Nothing to buy.");
        return;
    }

    println!("\nShopping suggestions");
    println!("{}", "=".repeat(RULE_WIDTH));
    for suggestion in suggestions {
        let mark = if suggestion.preselected { "[x]" } else { "[ ]" };
        let reason = match suggestion.reason {
            SuggestionReason::Missing => "missing",
            SuggestionReason::Insufficient => "short",
        };
        println!(
            "{mark} {:<30} {:>12}  ({reason})",
            suggestion.name,
            format_amount(suggestion.quantity, suggestion.unit.as_deref()),
        );
    }
}

fn weekday_header(week_start: WeekStart) -> Vec<&'static str> {
    let mut day = week_start.weekday();
    (0..7)
        .map(|_| {
            let label = match day {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            };
            day = day.succ();
            label
        })
        .collect()
}

/// Print a month grid with per-day expiry markers
///
/// `*` marks today, `!` an expired item, `~` an item expiring soon, `+` a fresh item.
pub fn print_calendar(calendar: &CalendarMonth) {
    println!("\nExpiry calendar {}-{:02}", calendar.year, calendar.month);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{}",
        weekday_header(calendar.week_start)
            .iter()
            .map(|d| format!("{d:<10}"))
            .collect::<String>()
    );

    for week in &calendar.weeks {
        let row: String = week
            .iter()
            .map(|day| {
                if !day.in_month {
                    return format!("{:<10}", ".");
                }
                let mut cell = format!("{:>2}", day.date.day());
                if day.is_today {
                    cell.push('*');
                }
                for item in &day.items {
                    cell.push(match item.status {
                        ExpiryStatus::Expired => '!',
                        ExpiryStatus::ExpiringSoon => '~',
                        ExpiryStatus::Fresh => '+',
                    });
                }
                format!("{cell:<10}")
            })
            .collect();
        println!("{}", row.trim_end());
    }

    println!(
        "\nexpired: {}  expiring soon: {}  fresh: {}",
        calendar.count_with_status(ExpiryStatus::Expired),
        calendar.count_with_status(ExpiryStatus::ExpiringSoon),
        calendar.count_with_status(ExpiryStatus::Fresh)
    );
}

/// Print the upcoming expirations list
pub fn print_upcoming(upcoming: &[ExpiringItem], within_days: i64) {
    println!("\nExpiring within {within_days} days");
    println!("{}", "-".repeat(RULE_WIDTH));
    if upcoming.is_empty() {
        println!("(none)");
        return;
    }
    for item in upcoming {
        let when = match item.days_until_expiry {
            0 => "today".to_owned(),
            1 => "tomorrow".to_owned(),
            n => format!("in {n} days"),
        };
        println!(
            "{} {:<30} {:>12}  {when}",
            item.expiry_date.format("%Y-%m-%d"),
            item.name,
            format_amount(item.quantity, item.unit.as_deref()),
        );
    }
}
