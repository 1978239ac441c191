// ABOUTME: Integration tests for qibla bearing, distance and compass classification
// ABOUTME: Checks reference cities, range invariants and the nearest-province lookup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use qibla_times::constants::geodesy::EARTH_RADIUS_KM;
use qibla_times::geo::{
    bearing_to, classify, distance_to, haversine_km, nearest, needle_rotation, qibla_for,
    CompassDirection, Located, KAABA, KAABA_INFO,
};
use qibla_times::models::GeoPoint;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

#[test]
fn test_kaaba_reading_is_exactly_zero() {
    let reading = qibla_for(KAABA);
    assert_eq!(reading.bearing_degrees.to_bits(), 0.0_f64.to_bits());
    assert_eq!(reading.distance_km.to_bits(), 0.0_f64.to_bits());
    assert_eq!(reading.direction, CompassDirection::North);
}

#[test]
fn test_due_north_of_kaaba_points_south() {
    let origin = GeoPoint::new(30.0, 39.8262);
    assert_close(bearing_to(origin), 180.0, 1e-9);
    assert_close(distance_to(origin), 953.77, 1.0);
    assert_eq!(qibla_for(origin).direction, CompassDirection::South);
}

#[test]
fn test_due_south_of_kaaba_points_north() {
    let origin = GeoPoint::new(-30.0, 39.8262);
    assert_close(bearing_to(origin), 0.0, 1e-9);
    assert_eq!(qibla_for(origin).direction, CompassDirection::North);
}

#[test]
fn test_bangkok() {
    let reading = qibla_for(GeoPoint::new(13.7563, 100.5018));
    assert_close(reading.bearing_degrees, 286.8845, 0.01);
    assert_close(reading.distance_km, 6451.01, 1.0);
    assert_eq!(reading.direction, CompassDirection::West);
    assert_eq!(reading.direction.thai_name(), "ตะวันตก");
}

#[test]
fn test_reference_cities() {
    let cases = [
        // (lat, lon, bearing, distance km, sector)
        (6.8696, 101.2501, 290.7275, 6775.9, CompassDirection::West),
        (18.7883, 98.9853, 283.5126, 6147.82, CompassDirection::West),
        (51.5074, -0.1278, 118.9872, 4793.78, CompassDirection::SouthEast),
        (40.7128, -74.006, 58.4817, 10306.31, CompassDirection::NorthEast),
        (-33.8688, 151.2093, 277.4996, 13236.26, CompassDirection::West),
        (21.4225, 30.0, 88.2017, 1016.97, CompassDirection::East),
    ];
    for (lat, lon, bearing, distance, sector) in cases {
        let reading = qibla_for(GeoPoint::new(lat, lon));
        assert_close(reading.bearing_degrees, bearing, 0.01);
        assert_close(reading.distance_km, distance, 1.0);
        assert_eq!(reading.direction, sector, "sector for ({lat}, {lon})");
    }
}

#[test]
fn test_bearing_and_distance_ranges_over_grid() {
    let max_distance = std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6;
    for lat_step in -17..=17 {
        for lon_step in -36..=36 {
            let origin = GeoPoint::new(f64::from(lat_step) * 5.0, f64::from(lon_step) * 5.0);
            let bearing = bearing_to(origin);
            let distance = distance_to(origin);
            assert!(
                (0.0..360.0).contains(&bearing),
                "bearing {bearing} out of range at {origin}"
            );
            assert!(
                (0.0..=max_distance).contains(&distance),
                "distance {distance} out of range at {origin}"
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let origin = GeoPoint::new(13.7563, 100.5018);
    let first = qibla_for(origin);
    for _ in 0..10 {
        let again = qibla_for(origin);
        assert_eq!(again.bearing_degrees.to_bits(), first.bearing_degrees.to_bits());
        assert_eq!(again.distance_km.to_bits(), first.distance_km.to_bits());
    }
}

#[test]
fn test_nan_input_propagates_without_panicking() {
    let reading = qibla_for(GeoPoint::new(f64::NAN, 100.0));
    assert!(reading.bearing_degrees.is_nan());
    assert!(reading.distance_km.is_nan());
    assert_eq!(reading.direction, CompassDirection::North);
}

#[test]
fn test_classify_sector_centres_and_edges() {
    let expected = [
        (0.0, CompassDirection::North),
        (22.4, CompassDirection::North),
        (44.9, CompassDirection::NorthEast),
        (90.0, CompassDirection::East),
        (135.0, CompassDirection::SouthEast),
        (180.0, CompassDirection::South),
        (202.5, CompassDirection::SouthWest),
        (270.0, CompassDirection::West),
        (292.4, CompassDirection::West),
        (315.0, CompassDirection::NorthWest),
        (337.4, CompassDirection::NorthWest),
        (359.9, CompassDirection::North),
    ];
    for (bearing, direction) in expected {
        assert_eq!(classify(bearing), direction, "bearing {bearing}");
    }
}

#[test]
fn test_haversine_between_thai_cities() {
    let bangkok = GeoPoint::new(13.7563, 100.5018);
    let chiang_mai = GeoPoint::new(18.7883, 98.9853);
    let distance = haversine_km(bangkok, chiang_mai);
    assert!(distance > 570.0 && distance < 600.0, "got {distance}");
}

#[test]
fn test_needle_follows_device_heading() {
    let bearing = bearing_to(GeoPoint::new(13.7563, 100.5018));
    assert_close(needle_rotation(bearing, None), bearing, 0.0);
    assert_close(needle_rotation(bearing, Some(bearing)), 0.0, 0.0);
}

#[test]
fn test_kaaba_info() {
    assert_eq!(KAABA_INFO.location, KAABA);
    assert_eq!(KAABA_INFO.name_arabic, "الكعبة");
}

struct Province {
    name: &'static str,
    lat: f64,
    lon: f64,
}

impl Located for Province {
    fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[test]
fn test_nearest_province_for_device_location() {
    let provinces = [
        Province {
            name: "กรุงเทพมหานคร",
            lat: 13.7563,
            lon: 100.5018,
        },
        Province {
            name: "เชียงใหม่",
            lat: 18.7883,
            lon: 98.9853,
        },
        Province {
            name: "ปัตตานี",
            lat: 6.8696,
            lon: 101.2501,
        },
        Province {
            name: "สงขลา",
            lat: 7.1896,
            lon: 100.5945,
        },
    ];

    // Yala town sits closer to Pattani than to Songkhla
    let yala = GeoPoint::new(6.5411, 101.2804);
    assert_eq!(nearest(yala, &provinces).map(|p| p.name), Some("ปัตตานี"));

    let lamphun = GeoPoint::new(18.5744, 99.0087);
    assert_eq!(nearest(lamphun, &provinces).map(|p| p.name), Some("เชียงใหม่"));

    let empty: [Province; 0] = [];
    assert!(nearest(yala, &empty).is_none());
}
