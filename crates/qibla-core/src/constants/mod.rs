// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Geodesy, prayer API, fallback schedule and calculator constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than kept in one flat list.

/// Spherical-earth geodesy
pub mod geodesy {
    /// Mean earth radius used by the haversine formula, in kilometres
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// The Kaaba in Mecca, target of every qibla computation
pub mod kaaba {
    /// Latitude of the Kaaba in degrees
    pub const LATITUDE: f64 = 21.4225;
    /// Longitude of the Kaaba in degrees
    pub const LONGITUDE: f64 = 39.8262;
    /// Thai display name
    pub const NAME_TH: &str = "กะอ์บะห์ (Ka'bah)";
    /// Arabic name
    pub const NAME_AR: &str = "الكعبة";
    /// City, in Thai
    pub const CITY_TH: &str = "มักกะห์";
    /// Country, in Thai
    pub const COUNTRY_TH: &str = "ซาอุดีอาระเบีย";
}

/// Upstream prayer-times service
pub mod prayer_api {
    /// Service name used in logs and error messages
    pub const SERVICE_NAME: &str = "Aladhan";
    /// Default base URL of the prayer-times service
    pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com";
    /// Path prefix of the daily timings endpoint
    pub const TIMINGS_PATH: &str = "/v1/timings";
    /// Default calculation method (ISNA)
    pub const DEFAULT_METHOD: u8 = 2;
    /// Default juristic school for Asr (Shafi)
    pub const DEFAULT_SCHOOL: u8 = 0;
}

/// Retry and timeout defaults for the prayer-times client
pub mod retry {
    /// Total number of attempts, including the first one
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Linear backoff step: attempt `i` waits `i * step`
    pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
    /// Upper bound on a single attempt
    pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 10;
    /// TCP connect timeout
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Approximate Bangkok schedule served when the upstream service is unreachable
pub mod fallback_times {
    /// Dawn prayer
    pub const FAJR: &str = "05:15";
    /// Sunrise
    pub const SUNRISE: &str = "06:30";
    /// Midday prayer
    pub const DHUHR: &str = "12:15";
    /// Afternoon prayer
    pub const ASR: &str = "15:30";
    /// Sunset prayer
    pub const MAGHRIB: &str = "18:15";
    /// Night prayer
    pub const ISHA: &str = "19:30";
    /// Hijri label used while the real date is unknown ("loading...")
    pub const HIJRI_PLACEHOLDER: &str = "กำลังโหลด...";
}

/// Thai calendar formatting
pub mod thai_calendar {
    /// Offset between the Gregorian year and the Thai Buddhist era
    pub const BUDDHIST_ERA_OFFSET: i32 = 543;
    /// Abbreviated Thai month names, January first
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.",
        "ธ.ค.",
    ];
}

/// Zakat on cash and gold
pub mod zakat {
    /// Nisab threshold expressed in units of gold
    pub const NISAB_GOLD_UNITS: f64 = 85.0;
    /// Zakat rate applied to total wealth above nisab (2.5%)
    pub const RATE: f64 = 0.025;
    /// Gold price assumed when the caller gives none, in THB
    pub const DEFAULT_GOLD_PRICE: f64 = 32_000.0;
}

/// Fixed shares of the simplified inheritance calculator
pub mod inheritance {
    /// Spouse share when the deceased left children
    pub const SPOUSE_WITH_CHILDREN: f64 = 1.0 / 8.0;
    /// Spouse share without children
    pub const SPOUSE_WITHOUT_CHILDREN: f64 = 1.0 / 4.0;
    /// Share of each parent when the deceased left children
    pub const PARENT_WITH_CHILDREN: f64 = 1.0 / 6.0;
    /// Residual units per son
    pub const SON_UNITS: u32 = 2;
    /// Residual units per daughter
    pub const DAUGHTER_UNITS: u32 = 1;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Default service name
    pub const QIBLA_TIMES: &str = "qibla-times";
}
