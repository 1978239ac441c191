// ABOUTME: Eight-sector compass classification for bearings
// ABOUTME: Provides English and Thai names for each sector
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight 45°-wide compass sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    /// North, centred on 0°
    North,
    /// Northeast, centred on 45°
    NorthEast,
    /// East, centred on 90°
    East,
    /// Southeast, centred on 135°
    SouthEast,
    /// South, centred on 180°
    South,
    /// Southwest, centred on 225°
    SouthWest,
    /// West, centred on 270°
    West,
    /// Northwest, centred on 315°
    NorthWest,
}

/// Sector table checked in order; lower bound inclusive, upper exclusive.
/// North wraps around 0° so it appears twice.
const SECTORS: [(f64, f64, CompassDirection); 9] = [
    (337.5, 360.0, CompassDirection::North),
    (0.0, 22.5, CompassDirection::North),
    (22.5, 67.5, CompassDirection::NorthEast),
    (67.5, 112.5, CompassDirection::East),
    (112.5, 157.5, CompassDirection::SouthEast),
    (157.5, 202.5, CompassDirection::South),
    (202.5, 247.5, CompassDirection::SouthWest),
    (247.5, 292.5, CompassDirection::West),
    (292.5, 337.5, CompassDirection::NorthWest),
];

/// Classify a bearing in degrees into its compass sector.
///
/// Values outside `[0, 360)`, including NaN, fall back to North.
#[must_use]
pub fn classify(bearing: f64) -> CompassDirection {
    SECTORS
        .iter()
        .find(|(min, max, _)| bearing >= *min && bearing < *max)
        .map_or(CompassDirection::North, |(_, _, direction)| *direction)
}

impl CompassDirection {
    /// Abbreviation such as `"NE"`
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }

    /// English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
        }
    }

    /// Thai name
    #[must_use]
    pub const fn thai_name(self) -> &'static str {
        match self {
            Self::North => "เหนือ",
            Self::NorthEast => "ตะวันออกเฉียงเหนือ",
            Self::East => "ตะวันออก",
            Self::SouthEast => "ตะวันออกเฉียงใต้",
            Self::South => "ใต้",
            Self::SouthWest => "ตะวันตกเฉียงใต้",
            Self::West => "ตะวันตก",
            Self::NorthWest => "ตะวันตกเฉียงเหนือ",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_upper_sector() {
        assert_eq!(classify(22.5), CompassDirection::NorthEast);
        assert_eq!(classify(67.5), CompassDirection::East);
        assert_eq!(classify(292.5), CompassDirection::NorthWest);
        assert_eq!(classify(337.5), CompassDirection::North);
    }

    #[test]
    fn test_out_of_range_falls_back_to_north() {
        assert_eq!(classify(f64::NAN), CompassDirection::North);
        assert_eq!(classify(-10.0), CompassDirection::North);
        assert_eq!(classify(360.0), CompassDirection::North);
    }

    #[test]
    fn test_names() {
        assert_eq!(CompassDirection::SouthWest.abbreviation(), "SW");
        assert_eq!(CompassDirection::West.thai_name(), "ตะวันตก");
        assert_eq!(CompassDirection::NorthEast.to_string(), "Northeast");
    }
}
