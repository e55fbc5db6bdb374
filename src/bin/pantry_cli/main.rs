// ABOUTME: Pantry CLI - command-line front end for the pantry planner
// ABOUTME: Checks recipe availability, suggests purchases, and renders expiry calendars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Which recipe ingredients are at home, on the list, or missing
//! pantry-cli check --snapshot snapshot.json --scale 1.5
//!
//! # Shopping suggestions as JSON
//! pantry-cli --format json shop --snapshot snapshot.json
//!
//! # Expiry calendar for March 2025
//! pantry-cli calendar --snapshot snapshot.json --year 2025 --month 3
//!
//! # Show how a name is normalized for matching
//! pantry-cli normalize "Fresh Chopped Tomatoes"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use pantry_core::constants::defaults;
use pantry_core::errors::{AppError, AppResult};
use pantry_planner::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Pantry planner CLI",
    long_about = "Checks recipes against pantry and grocery inventory, suggests purchases, and shows upcoming expirations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check every recipe ingredient against pantry and grocery inventory
    Check {
        /// Snapshot file with pantryItems, groceryItems, and recipeIngredients
        #[arg(long)]
        snapshot: PathBuf,

        /// Multiply every recipe quantity by this factor
        #[arg(long, default_value = "1")]
        scale: f64,
    },

    /// Suggest shopping list entries for ingredients that are missing or short
    Shop {
        /// Snapshot file with pantryItems, groceryItems, and recipeIngredients
        #[arg(long)]
        snapshot: PathBuf,

        /// Multiply every recipe quantity by this factor
        #[arg(long, default_value = "1")]
        scale: f64,

        /// Leave out ingredients that are available but short
        #[arg(long)]
        no_partial: bool,
    },

    /// Show pantry expirations on a month calendar
    Calendar {
        /// Snapshot file with pantryItems
        #[arg(long)]
        snapshot: PathBuf,

        /// Calendar year
        #[arg(long)]
        year: i32,

        /// Month number (1-12)
        #[arg(long)]
        month: u32,

        /// Reference date (defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Days ahead to list in the upcoming section
        #[arg(long, default_value_t = defaults::UPCOMING_EXPIRY_WINDOW_DAYS)]
        within_days: i64,
    },

    /// Show the normalized form and significant words of an ingredient name
    Normalize {
        /// Text to normalize
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    debug!(format = ?cli.format, "Pantry CLI starting");

    run(cli.command, cli.format).map_err(describe)
}

fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    match command {
        Command::Check { snapshot, scale } => {
            commands::availability::check(&snapshot, scale, format)
        }
        Command::Shop {
            snapshot,
            scale,
            no_partial,
        } => commands::availability::shop(&snapshot, scale, no_partial, format),
        Command::Calendar {
            snapshot,
            year,
            month,
            today,
            within_days,
        } => commands::calendar::show(&snapshot, year, month, today, within_days, format),
        Command::Normalize { text } => commands::text::normalize(&text, format),
    }
}

/// Lead a command failure with the user-facing description of its code
fn describe(err: AppError) -> Error {
    let description = err.code.description();
    Error::new(err).context(description)
}
