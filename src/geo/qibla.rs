// ABOUTME: Great-circle bearing and haversine distance toward the Kaaba
// ABOUTME: Also converts device compass readings into a needle rotation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! Qibla bearing and distance.
//!
//! Both computations assume a spherical earth of radius
//! [`EARTH_RADIUS_KM`](qibla_core::constants::geodesy::EARTH_RADIUS_KM).
//!
//! At the Kaaba itself the bearing is exactly `0.0` (`atan2(0, 0)`) and the
//! distance is exactly `0.0`.

use super::direction::{classify, CompassDirection};
use crate::models::GeoPoint;
use qibla_core::constants::{geodesy, kaaba};
use serde::{Deserialize, Serialize};

/// Coordinates of the Kaaba in Mecca
pub const KAABA: GeoPoint = GeoPoint::new(kaaba::LATITUDE, kaaba::LONGITUDE);

/// Display metadata for the Kaaba
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaabaInfo {
    /// Location of the Kaaba
    pub location: GeoPoint,
    /// Thai name
    pub name: &'static str,
    /// Arabic name
    pub name_arabic: &'static str,
    /// City, in Thai
    pub city: &'static str,
    /// Country, in Thai
    pub country: &'static str,
}

/// The Kaaba as shown on the qibla page
pub const KAABA_INFO: KaabaInfo = KaabaInfo {
    location: KAABA,
    name: kaaba::NAME_TH,
    name_arabic: kaaba::NAME_AR,
    city: kaaba::CITY_TH,
    country: kaaba::COUNTRY_TH,
};

/// Qibla bearing, distance and compass sector for one origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaReading {
    /// Point the reading was taken from
    pub origin: GeoPoint,
    /// Initial great-circle bearing toward the Kaaba, degrees in `[0, 360)`
    pub bearing_degrees: f64,
    /// Great-circle distance to the Kaaba in kilometres
    pub distance_km: f64,
    /// Compass sector containing the bearing
    pub direction: CompassDirection,
}

/// Initial great-circle bearing from `from` to `to`, in degrees clockwise
/// from true north, normalized to `[0, 360)`.
#[must_use]
#[allow(clippy::suboptimal_flops)] // fused ops would make the Kaaba-to-itself case round to 180
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let x = phi2.cos() * delta_lambda.sin();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    let mut bearing = x.atan2(y).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // A tiny negative angle rounds up to exactly 360.0 after the shift.
    if bearing >= 360.0 {
        bearing = 0.0;
    }
    bearing
}

/// Great-circle distance between two points in kilometres (haversine)
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let sin_half_phi = (delta_phi / 2.0).sin();
    let sin_half_lambda = (delta_lambda / 2.0).sin();
    let a = sin_half_phi * sin_half_phi
        + phi1.cos() * phi2.cos() * sin_half_lambda * sin_half_lambda;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    geodesy::EARTH_RADIUS_KM * c
}

/// Qibla bearing from `origin`, degrees in `[0, 360)`
#[must_use]
pub fn bearing_to(origin: GeoPoint) -> f64 {
    initial_bearing(origin, KAABA)
}

/// Distance from `origin` to the Kaaba in kilometres
#[must_use]
pub fn distance_to(origin: GeoPoint) -> f64 {
    haversine_km(origin, KAABA)
}

/// Bearing, distance and compass sector from `origin` in one call
#[must_use]
pub fn qibla_for(origin: GeoPoint) -> QiblaReading {
    let bearing_degrees = bearing_to(origin);
    QiblaReading {
        origin,
        bearing_degrees,
        distance_km: distance_to(origin),
        direction: classify(bearing_degrees),
    }
}

/// Angle to rotate a compass needle so that it points at the qibla.
///
/// With a device heading the needle turns relative to where the device
/// faces; without one it is drawn relative to true north.
#[must_use]
pub fn needle_rotation(qibla_bearing: f64, device_heading: Option<f64>) -> f64 {
    device_heading.map_or(qibla_bearing, |heading| qibla_bearing - heading)
}

/// Convert a device-orientation `alpha` angle into a compass heading
#[must_use]
pub fn heading_from_alpha(alpha: f64) -> f64 {
    360.0 - alpha
}
