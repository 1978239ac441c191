// ABOUTME: Geodesic calculator for qibla direction and great-circle distance
// ABOUTME: Pure spherical-earth functions plus compass classification and place lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! # Geodesic Calculator
//!
//! Everything here is a pure function of its inputs: no state, no I/O and no
//! error values. Non-finite input propagates as NaN instead of panicking.
//!
//! - [`qibla`]: initial bearing and haversine distance, toward the Kaaba or
//!   between arbitrary points
//! - [`direction`]: eight-sector compass classification of a bearing
//! - [`nearest`]: closest known place to a device location

/// Compass-sector classification of bearings
pub mod direction;
/// Nearest-place lookup over caller-supplied locations
pub mod nearest;
/// Bearing and distance toward the Kaaba
pub mod qibla;

pub use direction::{classify, CompassDirection};
pub use nearest::{nearest, Located};
pub use qibla::{
    bearing_to, distance_to, haversine_km, heading_from_alpha, initial_bearing, needle_rotation,
    qibla_for, KaabaInfo, QiblaReading, KAABA, KAABA_INFO,
};
