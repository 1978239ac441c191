// ABOUTME: Core data models for qibla and prayer-time computations
// ABOUTME: Re-exports GeoPoint, PrayerTimeSet, Prayer and DataSource
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! # Data Models
//!
//! Plain value types shared by the geodesic calculator and the prayer-time
//! client. Every model is constructed per request and carries no identity
//! beyond its fields.
//!
//! ## Core Models
//!
//! - `GeoPoint`: latitude/longitude pair in degrees
//! - `PrayerTimeSet`: the six daily times plus Gregorian and Hijri labels
//! - `Prayer`: enumeration of the six entries with Thai display names
//! - `DataSource`: whether a `PrayerTimeSet` is live upstream data or the fallback

mod geo_point;
mod prayer;

pub use geo_point::GeoPoint;
pub use prayer::{thai_date_label, DataSource, Prayer, PrayerTimeSet};
