// ABOUTME: Re-exports command modules for pantry-cli
// ABOUTME: Provides access to availability, calendar, and text commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod availability;
pub mod calendar;
pub mod text;
