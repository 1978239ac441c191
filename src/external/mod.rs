// ABOUTME: External API client modules (Aladhan prayer timings)
// ABOUTME: Provides the retrying prayer-times client and its retry policy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! External API Clients
//!
//! Clients for upstream services used by the library.

pub mod prayer_times;
pub mod retry;

// Re-export commonly used types
pub use prayer_times::{
    CalculationMethod, HttpTimingsTransport, JuristicSchool, PrayerFetchError,
    PrayerTimesClient, PrayerTimesReport, TimingsRequest, TimingsResponse, TimingsTransport,
};
pub use retry::RetryPolicy;
