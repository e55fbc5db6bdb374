// ABOUTME: Month calendar grid of pantry items by expiry date
// ABOUTME: Builds whole-week grids and classifies items as expired, soon, or fresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Expiry Calendar
//!
//! Lays a month out as whole weeks so it can be rendered as a grid, and pins
//! every pantry item with a best-before date onto its day. Days from the
//! neighbouring months that pad the first and last week are included and
//! flagged with `in_month = false`.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use pantry_core::constants::defaults;
use pantry_core::errors::{AppError, AppResult};
use pantry_core::models::InventoryItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{PlannerConfig, WeekStart};

/// Freshness of an item relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// Best-before date has passed
    Expired,
    /// Expires today or within the warning window
    ExpiringSoon,
    /// Expires after the warning window
    Fresh,
}

impl ExpiryStatus {
    /// Classify an expiry date
    #[must_use]
    pub fn classify(expiry: NaiveDate, today: NaiveDate, soon_days: i64) -> Self {
        let days_left = (expiry - today).num_days();
        if days_left < 0 {
            Self::Expired
        } else if days_left <= soon_days {
            Self::ExpiringSoon
        } else {
            Self::Fresh
        }
    }
}

/// Calendar layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    /// First column of each week
    pub week_start: WeekStart,
    /// Days ahead of expiry that count as "soon"
    pub soon_days: i64,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            soon_days: defaults::EXPIRY_SOON_DAYS,
        }
    }
}

impl CalendarOptions {
    /// Options taken from planner configuration
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            week_start: config.week_start,
            soon_days: config.expiry_soon_days,
        }
    }
}

/// Pantry item pinned to its expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringItem {
    /// Backend identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Item name
    pub name: String,
    /// Amount on hand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Best-before date
    pub expiry_date: NaiveDate,
    /// Days from today until expiry (negative once expired)
    pub days_until_expiry: i64,
    /// Freshness classification
    pub status: ExpiryStatus,
}

impl ExpiringItem {
    fn from_item(item: &InventoryItem, today: NaiveDate, soon_days: i64) -> Option<Self> {
        let expiry_date = item.expiry_date?;
        Some(Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            expiry_date,
            days_until_expiry: (expiry_date - today).num_days(),
            status: ExpiryStatus::classify(expiry_date, today, soon_days),
        })
    }
}

/// One cell of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Date of this cell
    pub date: NaiveDate,
    /// False for padding days from the previous or next month
    pub in_month: bool,
    /// Whether this cell is today
    pub is_today: bool,
    /// Items expiring on this date, in input order
    pub items: Vec<ExpiringItem>,
}

/// A month laid out as whole weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    /// Calendar year
    pub year: i32,
    /// Month number, 1 to 12
    pub month: u32,
    /// First column of each week
    pub week_start: WeekStart,
    /// Four to six rows of seven days
    pub weeks: Vec<[CalendarDay; 7]>,
}

impl CalendarMonth {
    /// Every day of the grid, padding days included
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// Number of items in the month (padding days excluded) with the given status
    #[must_use]
    pub fn count_with_status(&self, status: ExpiryStatus) -> usize {
        self.days()
            .filter(|day| day.in_month)
            .flat_map(|day| day.items.iter())
            .filter(|item| item.status == status)
            .count()
    }
}

/// Lay out `year`/`month` as a grid and pin expiring items onto it
///
/// # Errors
///
/// Returns `InvalidInput` if the month is outside 1..=12 or the date cannot be
/// represented.
pub fn build_month(
    year: i32,
    month: u32,
    items: &[InventoryItem],
    today: NaiveDate,
    options: &CalendarOptions,
) -> AppResult<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_input(format!("invalid month {year}-{month:02}")))?;
    let out_of_range =
        || AppError::invalid_input(format!("month {year}-{month:02} out of range"));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)?;

    let lead = match options.week_start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
        WeekStart::Monday => first.weekday().num_days_from_monday(),
    };
    let grid_start = first
        .checked_sub_days(Days::new(u64::from(lead)))
        .ok_or_else(out_of_range)?;

    let mut by_date: HashMap<NaiveDate, Vec<ExpiringItem>> = HashMap::new();
    for expiring in items
        .iter()
        .filter_map(|item| ExpiringItem::from_item(item, today, options.soon_days))
    {
        by_date.entry(expiring.expiry_date).or_default().push(expiring);
    }

    let mut weeks = Vec::with_capacity(6);
    let mut week_start = grid_start;
    loop {
        let mut dates = [week_start; 7];
        for (offset, date) in (1_u64..).zip(dates.iter_mut().skip(1)) {
            *date = week_start
                .checked_add_days(Days::new(offset))
                .ok_or_else(out_of_range)?;
        }
        let week_end = dates[6];

        weeks.push(dates.map(|date| CalendarDay {
            date,
            in_month: date.month() == month && date.year() == year,
            is_today: date == today,
            items: by_date.remove(&date).unwrap_or_default(),
        }));

        if week_end >= last {
            break;
        }
        week_start = week_end.succ_opt().ok_or_else(out_of_range)?;
    }

    Ok(CalendarMonth {
        year,
        month,
        week_start: options.week_start,
        weeks,
    })
}

/// Items expiring between today and `within_days` from now, soonest first
///
/// Already-expired items are not included; the calendar shows those.
#[must_use]
pub fn upcoming_expirations(
    items: &[InventoryItem],
    today: NaiveDate,
    within_days: i64,
    options: &CalendarOptions,
) -> Vec<ExpiringItem> {
    let mut upcoming: Vec<ExpiringItem> = items
        .iter()
        .filter_map(|item| ExpiringItem::from_item(item, today, options.soon_days))
        .filter(|item| (0..=within_days).contains(&item.days_until_expiry))
        .collect();
    // Stable sort keeps input order for equal dates
    upcoming.sort_by_key(|item| item.expiry_date);
    upcoming
}
