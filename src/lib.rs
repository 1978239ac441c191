// ABOUTME: Main library entry point for qibla direction and prayer-time retrieval
// ABOUTME: Exposes the geodesic calculator, prayer-times client and Islamic finance calculators
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

#![deny(unsafe_code)]

//! # Qibla Times
//!
//! Location-aware helpers for Muslim daily practice.
//!
//! ## Features
//!
//! - **Qibla**: initial great-circle bearing and haversine distance to the
//!   Kaaba, classified into an eight-sector compass direction
//! - **Prayer times**: one day's schedule from the Aladhan API, retried with
//!   linear backoff and replaced by a fixed schedule when the service is down
//! - **Calculators**: zakat on cash and gold, simplified inheritance shares
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use qibla_times::config::PrayerApiConfig;
//! use qibla_times::external::PrayerTimesClient;
//! use qibla_times::geo::qibla_for;
//! use qibla_times::models::GeoPoint;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     qibla_times::logging::init_from_env()?;
//!
//!     let bangkok = GeoPoint::new(13.7563, 100.5018);
//!     let qibla = qibla_for(bangkok);
//!     println!("{:.1}° {}", qibla.bearing_degrees, qibla.direction.thai_name());
//!
//!     let config = PrayerApiConfig::from_env();
//!     config.validate()?;
//!     let times = PrayerTimesClient::new(&config).fetch_prayer_times(bangkok).await;
//!     println!("Maghrib {}", times.maghrib);
//!     Ok(())
//! }
//! ```

/// Zakat, inheritance and amount formatting
pub mod calculators;

/// Environment-driven configuration
pub mod config;

/// Clients for upstream services
pub mod external;

/// Qibla bearing, distance, compass sectors and nearest-place lookup
pub mod geo;

/// Structured logging setup
pub mod logging;

/// Shared value types
pub mod models;

/// HTTP client helpers
pub mod utils;

/// Error types and codes
pub use qibla_core::errors;

/// Domain constants
pub use qibla_core::constants;
