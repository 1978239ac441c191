// ABOUTME: Prayer-times API client with linear-backoff retry and static fallback
// ABOUTME: Fetches the daily schedule for a location and never fails outright
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! Prayer-Times Client
//!
//! Retrieves one day's prayer schedule from the Aladhan timings API.
//!
//! # Behaviour
//! - Up to [`RetryPolicy::max_attempts`] sequential attempts, attempt `i`
//!   preceded by a wait of `i * base_delay` (0 s, 1 s, 2 s by default)
//! - Each attempt bounded by [`RetryPolicy::attempt_timeout`]
//! - Network errors, timeouts, non-2xx statuses and malformed bodies are all
//!   retried the same way
//! - When every attempt fails the fixed fallback schedule is returned, so the
//!   caller always gets something to display
//!
//! # Example
//! ```rust,no_run
//! use qibla_times::config::environment::PrayerApiConfig;
//! use qibla_times::external::PrayerTimesClient;
//! use qibla_times::models::GeoPoint;
//!
//! # async fn example() {
//! let client = PrayerTimesClient::new(&PrayerApiConfig::default());
//! let times = client
//!     .fetch_prayer_times(GeoPoint::new(13.7563, 100.5018))
//!     .await;
//! println!("Fajr {}", times.fajr);
//! # }
//! ```

use super::retry::RetryPolicy;
use crate::config::environment::PrayerApiConfig;
use crate::models::{DataSource, GeoPoint, PrayerTimeSet};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use qibla_core::constants::prayer_api;
use qibla_core::errors::AppError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Astronomical calculation method understood by the timings API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Shia Ithna-Ansari
    Jafari,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Islamic Society of North America
    Isna,
    /// Muslim World League
    MuslimWorldLeague,
    /// Umm Al-Qura University, Makkah
    UmmAlQura,
    /// Egyptian General Authority of Survey
    Egyptian,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    /// Gulf Region
    Gulf,
    /// Kuwait
    Kuwait,
    /// Qatar
    Qatar,
    /// Majlis Ugama Islam Singapura
    Singapore,
    /// Diyanet Isleri Baskanligi, Turkey
    Turkey,
}

impl CalculationMethod {
    /// Numeric id sent as the `method` query parameter
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Jafari => 0,
            Self::Karachi => 1,
            Self::Isna => 2,
            Self::MuslimWorldLeague => 3,
            Self::UmmAlQura => 4,
            Self::Egyptian => 5,
            Self::Tehran => 7,
            Self::Gulf => 8,
            Self::Kuwait => 9,
            Self::Qatar => 10,
            Self::Singapore => 11,
            Self::Turkey => 13,
        }
    }

    /// Method for a numeric id, if it is one of the supported methods
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Jafari),
            1 => Some(Self::Karachi),
            2 => Some(Self::Isna),
            3 => Some(Self::MuslimWorldLeague),
            4 => Some(Self::UmmAlQura),
            5 => Some(Self::Egyptian),
            7 => Some(Self::Tehran),
            8 => Some(Self::Gulf),
            9 => Some(Self::Kuwait),
            10 => Some(Self::Qatar),
            11 => Some(Self::Singapore),
            13 => Some(Self::Turkey),
            _ => None,
        }
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::from_id(prayer_api::DEFAULT_METHOD).unwrap_or(Self::Isna)
    }
}

/// Juristic school used for the Asr shadow length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JuristicSchool {
    /// Shafi, Maliki and Hanbali (shadow length 1)
    Shafi,
    /// Hanafi (shadow length 2)
    Hanafi,
}

impl JuristicSchool {
    /// Numeric id sent as the `school` query parameter
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Shafi => 0,
            Self::Hanafi => 1,
        }
    }

    /// School for a numeric id
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Shafi),
            1 => Some(Self::Hanafi),
            _ => None,
        }
    }
}

impl Default for JuristicSchool {
    fn default() -> Self {
        Self::from_id(prayer_api::DEFAULT_SCHOOL).unwrap_or(Self::Shafi)
    }
}

/// Why a single attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrayerFetchError {
    /// Connection, DNS or TLS failure, or the body could not be read
    #[error("network error: {0}")]
    Network(String),
    /// The attempt did not finish within its time limit
    #[error("request timed out")]
    Timeout,
    /// The service answered with a non-success status
    #[error("upstream returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },
    /// The body was not the expected JSON shape
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for PrayerFetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::MalformedBody(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<PrayerFetchError> for AppError {
    fn from(error: PrayerFetchError) -> Self {
        let message = error.to_string();
        match error {
            PrayerFetchError::Network(_) | PrayerFetchError::Timeout => {
                Self::external_unavailable(prayer_api::SERVICE_NAME, message)
            }
            PrayerFetchError::HttpStatus { .. } | PrayerFetchError::MalformedBody(_) => {
                Self::external_service(prayer_api::SERVICE_NAME, message)
            }
        }
    }
}

/// Top-level timings response; only the fields we read are modelled
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsResponse {
    /// Payload
    pub data: TimingsData,
}

/// Timings payload
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsData {
    /// Raw prayer times, possibly with a timezone suffix such as `" (+07)"`
    pub timings: RawTimings,
    /// Gregorian and Hijri date information
    pub date: DateInfo,
}

/// Raw time strings as returned upstream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimings {
    /// Fajr
    pub fajr: String,
    /// Sunrise
    pub sunrise: String,
    /// Dhuhr
    pub dhuhr: String,
    /// Asr
    pub asr: String,
    /// Maghrib
    pub maghrib: String,
    /// Isha
    pub isha: String,
}

/// Date section of the response
#[derive(Debug, Clone, Deserialize)]
pub struct DateInfo {
    /// Human-readable Gregorian date, e.g. `"14 Mar 2025"`
    pub readable: String,
    /// Hijri calendar date
    pub hijri: HijriDate,
}

/// Hijri date as returned upstream
#[derive(Debug, Clone, Deserialize)]
pub struct HijriDate {
    /// Day of month
    pub day: String,
    /// Month names
    pub month: HijriMonth,
    /// Hijri year
    pub year: String,
}

/// Hijri month names
#[derive(Debug, Clone, Deserialize)]
pub struct HijriMonth {
    /// Arabic month name
    pub ar: String,
}

impl TimingsResponse {
    /// Convert to a [`PrayerTimeSet`], keeping the leading `HH:MM` of each time
    ///
    /// # Errors
    ///
    /// Returns [`PrayerFetchError::MalformedBody`] if a time field is blank
    pub fn into_time_set(self) -> Result<PrayerTimeSet, PrayerFetchError> {
        let TimingsData { timings, date } = self.data;
        Ok(PrayerTimeSet {
            fajr: leading_time("Fajr", &timings.fajr)?,
            sunrise: leading_time("Sunrise", &timings.sunrise)?,
            dhuhr: leading_time("Dhuhr", &timings.dhuhr)?,
            asr: leading_time("Asr", &timings.asr)?,
            maghrib: leading_time("Maghrib", &timings.maghrib)?,
            isha: leading_time("Isha", &timings.isha)?,
            gregorian_date_label: date.readable,
            hijri_date_label: format!(
                "{} {} {}",
                date.hijri.day, date.hijri.month.ar, date.hijri.year
            ),
        })
    }
}

fn leading_time(field: &str, raw: &str) -> Result<String, PrayerFetchError> {
    raw.split_whitespace()
        .next()
        .map(str::to_owned)
        .ok_or_else(|| PrayerFetchError::MalformedBody(format!("empty {field} time")))
}

/// Parameters of one timings lookup
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsRequest {
    /// Location to compute times for
    pub point: GeoPoint,
    /// Calendar date
    pub date: NaiveDate,
    /// Calculation method
    pub method: CalculationMethod,
    /// Juristic school
    pub school: JuristicSchool,
    /// IANA timezone name, e.g. `"Asia/Bangkok"`
    pub timezone: Option<String>,
}

impl TimingsRequest {
    /// Endpoint path, e.g. `/v1/timings/5-1-2025` (day and month unpadded)
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{}/{}-{}-{}",
            prayer_api::TIMINGS_PATH,
            self.date.day(),
            self.date.month(),
            self.date.year()
        )
    }

    /// Full URL against `base_url`, without the query string
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Query parameters in the order they are sent
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitude", self.point.latitude.to_string()),
            ("longitude", self.point.longitude.to_string()),
            ("method", self.method.id().to_string()),
            ("school", self.school.id().to_string()),
        ];
        if let Some(timezone) = &self.timezone {
            params.push(("timezonestring", timezone.clone()));
        }
        params
    }
}

/// Performs a single timings request
#[async_trait]
pub trait TimingsTransport: Send + Sync {
    /// Issue one request without retrying
    async fn get_timings(&self, request: &TimingsRequest)
        -> Result<TimingsResponse, PrayerFetchError>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTimingsTransport {
    client: Client,
    base_url: String,
}

impl HttpTimingsTransport {
    /// Use an existing client against `base_url`
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TimingsTransport for HttpTimingsTransport {
    async fn get_timings(
        &self,
        request: &TimingsRequest,
    ) -> Result<TimingsResponse, PrayerFetchError> {
        let url = request.url(&self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&request.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PrayerFetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PrayerFetchError::MalformedBody(e.to_string()))
    }
}

/// Outcome of a fetch, including where the schedule came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimesReport {
    /// Live data or the fallback schedule
    pub source: DataSource,
    /// The schedule to display
    pub times: PrayerTimeSet,
    /// Attempts made, including the successful one
    pub attempts: u32,
    /// Error of the final failed attempt, if any attempt failed
    pub last_error: Option<PrayerFetchError>,
}

impl PrayerTimesReport {
    /// Whether the schedule came from the upstream service
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.source, DataSource::Live)
    }
}

/// Prayer-times client
#[derive(Clone)]
pub struct PrayerTimesClient {
    transport: Arc<dyn TimingsTransport>,
    policy: RetryPolicy,
    method: CalculationMethod,
    school: JuristicSchool,
    timezone: Option<String>,
}

impl fmt::Debug for PrayerTimesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrayerTimesClient")
            .field("policy", &self.policy)
            .field("method", &self.method)
            .field("school", &self.school)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl PrayerTimesClient {
    /// Create a client talking HTTP to the configured service
    #[must_use]
    pub fn new(config: &PrayerApiConfig) -> Self {
        let client =
            create_client_with_timeout(config.request_timeout_secs, config.connect_timeout_secs);
        let transport = HttpTimingsTransport::new(client, config.base_url.clone());
        Self {
            transport: Arc::new(transport),
            policy: config.retry_policy(),
            method: config.method,
            school: config.school,
            timezone: config.timezone.clone(),
        }
    }

    /// Create a client over any transport, with default method and school
    #[must_use]
    pub fn with_transport(transport: Arc<dyn TimingsTransport>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            policy,
            method: CalculationMethod::default(),
            school: JuristicSchool::default(),
            timezone: None,
        }
    }

    /// Override the calculation method and juristic school
    #[must_use]
    pub fn with_calculation(mut self, method: CalculationMethod, school: JuristicSchool) -> Self {
        self.method = method;
        self.school = school;
        self
    }

    /// Ask the service to report times in `timezone`
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Retry policy in effect
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Today's schedule at `point`, falling back silently when the service
    /// cannot be reached
    pub async fn fetch_prayer_times(&self, point: GeoPoint) -> PrayerTimeSet {
        self.fetch(point).await.times
    }

    /// Today's schedule at `point`, in the local calendar
    pub async fn fetch(&self, point: GeoPoint) -> PrayerTimesReport {
        self.fetch_on(point, Local::now().date_naive()).await
    }

    /// Schedule at `point` for `date`
    #[instrument(skip(self, point), fields(lat = point.latitude, lon = point.longitude))]
    pub async fn fetch_on(&self, point: GeoPoint, date: NaiveDate) -> PrayerTimesReport {
        let request = TimingsRequest {
            point,
            date,
            method: self.method,
            school: self.school,
            timezone: self.timezone.clone(),
        };
        let max_attempts = self.policy.attempts();
        let mut last_error = None;

        for attempt in 0..max_attempts {
            let wait = self.policy.delay_before(attempt);
            if !wait.is_zero() {
                debug!(wait = ?wait, "Backing off before retry");
                tokio::time::sleep(wait).await;
            }

            let number = attempt + 1;
            debug!(attempt = number, max_attempts, "Requesting prayer times");

            let outcome = match tokio::time::timeout(
                self.policy.attempt_timeout,
                self.transport.get_timings(&request),
            )
            .await
            {
                Ok(result) => result.and_then(TimingsResponse::into_time_set),
                Err(_) => Err(PrayerFetchError::Timeout),
            };

            match outcome {
                Ok(times) => {
                    info!(attempt = number, "Fetched prayer times");
                    return PrayerTimesReport {
                        source: DataSource::Live,
                        times,
                        attempts: number,
                        last_error,
                    };
                }
                Err(error) => {
                    warn!(attempt = number, max_attempts, error = %error, "Prayer times attempt failed");
                    last_error = Some(error);
                }
            }
        }

        warn!(max_attempts, "Using fallback prayer times");
        PrayerTimesReport {
            source: DataSource::Fallback,
            times: PrayerTimeSet::fallback(date),
            attempts: max_attempts,
            last_error,
        }
    }
}
