// ABOUTME: Nearest-place lookup by great-circle distance
// ABOUTME: Lets callers snap a device location onto a known set of places
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use super::qibla::haversine_km;
use crate::models::GeoPoint;

/// Anything with a position on the map.
///
/// Implemented by the caller's own place type (a province record, a mosque)
/// so that [`nearest`] works without copying data into a crate type.
pub trait Located {
    /// Position of this place
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

/// Place in `places` closest to `origin`.
///
/// Ties keep the earliest entry. Places whose distance is NaN are never
/// selected. Returns `None` for an empty slice.
#[must_use]
pub fn nearest<'a, P: Located>(origin: GeoPoint, places: &'a [P]) -> Option<&'a P> {
    let mut best: Option<(&'a P, f64)> = None;
    for place in places {
        let distance = haversine_km(origin, place.location());
        match best {
            Some((_, best_distance)) if distance >= best_distance || distance.is_nan() => {}
            None if distance.is_nan() => {}
            _ => best = Some((place, distance)),
        }
    }
    best.map(|(place, _)| place)
}
