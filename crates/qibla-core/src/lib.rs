// ABOUTME: Core types and constants for the qibla_times library
// ABOUTME: Foundation crate with error handling and domain constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

#![deny(unsafe_code)]

//! # Qibla Core
//!
//! Foundation crate providing shared types and constants for `qibla_times`.
//! It changes rarely, which keeps incremental rebuilds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Geodesy, prayer API and calculator constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
