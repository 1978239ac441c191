// ABOUTME: Daily prayer schedule model with Thai display names
// ABOUTME: Includes the deterministic fallback schedule and Buddhist-era date labels
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use chrono::{Datelike, NaiveDate};
use qibla_core::constants::{fallback_times, thai_calendar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six entries of a daily prayer schedule, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    /// Dawn prayer
    Fajr,
    /// Sunrise (not a prayer, but shown alongside the schedule)
    Sunrise,
    /// Midday prayer
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl Prayer {
    /// All entries in display order
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Thai display name
    #[must_use]
    pub const fn thai_name(self) -> &'static str {
        match self {
            Self::Fajr => "ฟัจร์",
            Self::Sunrise => "พระอาทิตย์ขึ้น",
            Self::Dhuhr => "ซุฮร์",
            Self::Asr => "อัศร์",
            Self::Maghrib => "มัครีบ",
            Self::Isha => "อีชาอ์",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's prayer schedule at one location.
///
/// Times are local `"HH:MM"` strings exactly as the schedule source reports
/// them. The date labels are display strings, not parsed dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimeSet {
    /// Dawn prayer
    pub fajr: String,
    /// Sunrise
    pub sunrise: String,
    /// Midday prayer
    pub dhuhr: String,
    /// Afternoon prayer
    pub asr: String,
    /// Sunset prayer
    pub maghrib: String,
    /// Night prayer
    pub isha: String,
    /// Human-readable Gregorian date
    pub gregorian_date_label: String,
    /// Human-readable Hijri date
    pub hijri_date_label: String,
}

impl PrayerTimeSet {
    /// Time string of one entry
    #[must_use]
    pub fn time_of(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// `(prayer, time)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.time_of(p)))
    }

    /// Fixed approximate schedule used when no live data is available.
    ///
    /// The Gregorian label is built locally in Thai Buddhist-era form; the
    /// Hijri label is a placeholder since only the upstream service converts
    /// dates to the Hijri calendar.
    #[must_use]
    pub fn fallback(date: NaiveDate) -> Self {
        Self {
            fajr: fallback_times::FAJR.to_owned(),
            sunrise: fallback_times::SUNRISE.to_owned(),
            dhuhr: fallback_times::DHUHR.to_owned(),
            asr: fallback_times::ASR.to_owned(),
            maghrib: fallback_times::MAGHRIB.to_owned(),
            isha: fallback_times::ISHA.to_owned(),
            gregorian_date_label: thai_date_label(date),
            hijri_date_label: fallback_times::HIJRI_PLACEHOLDER.to_owned(),
        }
    }
}

/// Format a date as `"{day} {Thai month abbreviation} {Buddhist-era year}"`
#[must_use]
pub fn thai_date_label(date: NaiveDate) -> String {
    let month = thai_calendar::MONTH_ABBREVIATIONS[date.month0() as usize];
    format!(
        "{} {} {}",
        date.day(),
        month,
        date.year() + thai_calendar::BUDDHIST_ERA_OFFSET
    )
}

/// Where a [`PrayerTimeSet`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Parsed from a successful upstream response
    Live,
    /// The fixed fallback schedule after every attempt failed
    Fallback,
}
