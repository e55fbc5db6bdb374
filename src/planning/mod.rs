// ABOUTME: Planning features built on top of ingredient availability matching
// ABOUTME: Recipe availability reports, shopping suggestions, and expiry calendars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pantry expiry calendar grids
pub mod calendar;
/// Recipe scaling and whole-recipe availability reports
pub mod recipe;
/// Shopping list suggestions for missing or short ingredients
pub mod shopping;

pub use calendar::{
    build_month, upcoming_expirations, CalendarDay, CalendarMonth, CalendarOptions,
    ExpiringItem, ExpiryStatus,
};
pub use recipe::{
    check_recipe, AvailabilitySummary, IngredientAvailability, RecipeAvailabilityReport,
    ScaleFactor,
};
pub use shopping::{suggest_purchases, ShoppingOptions, ShoppingSuggestion, SuggestionReason};
