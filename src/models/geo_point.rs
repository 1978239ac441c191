// ABOUTME: Latitude/longitude value type used by every geodesic computation
// ABOUTME: Construction never validates; validate() is an explicit opt-in check
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use qibla_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the earth's surface in decimal degrees.
///
/// The geodesic functions accept any value, including NaN, and let it
/// propagate through the arithmetic. Call [`GeoPoint::validate`] when a
/// caller needs range checking up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive, expected in `[-90, 90]`
    pub latitude: f64,
    /// Longitude in degrees, east positive, expected in `[-180, 180]`
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both coordinates are finite and inside their ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the offending coordinate
    pub fn validate(&self) -> AppResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::value_out_of_range(format!(
                "latitude {} must be within [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::value_out_of_range(format!(
                "longitude {} must be within [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_range_edges() {
        assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_and_nan() {
        assert!(GeoPoint::new(90.5, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -180.1).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_display_four_decimals() {
        assert_eq!(GeoPoint::new(13.756_33, 100.501_8).to_string(), "13.7563, 100.5018");
    }
}
