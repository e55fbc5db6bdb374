// ABOUTME: Core types and constants for the pantry planner
// ABOUTME: Foundation crate with error handling, inventory models, and matching tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for pantry tracking and
//! meal planning. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Stop words, unit synonyms, environment keys and defaults
//! - **models**: Ingredient requirements, inventory items, and availability results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (requirements, inventory items, availability)
pub mod models;
