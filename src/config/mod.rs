// ABOUTME: Configuration management module
// ABOUTME: Environment-driven settings for the prayer-times client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors
//! Configuration module
//!
//! The core API takes explicit config structs; loading them from the
//! environment is a convenience for the embedding application.

/// Environment-driven client configuration
pub mod environment;

pub use environment::PrayerApiConfig;
