// ABOUTME: Environment-driven configuration for the prayer-times client
// ABOUTME: Base URL, calculation method, school, timezone, timeouts and retry settings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use crate::external::prayer_times::{CalculationMethod, JuristicSchool};
use crate::external::retry::RetryPolicy;
use qibla_core::constants::{prayer_api, retry};
use qibla_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Prayer-times client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerApiConfig {
    /// Base URL of the timings service
    pub base_url: String,
    /// Calculation method
    pub method: CalculationMethod,
    /// Juristic school for Asr
    pub school: JuristicSchool,
    /// IANA timezone the service should report times in
    pub timezone: Option<String>,
    /// Per-attempt request timeout in seconds
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Total attempts per fetch
    pub max_attempts: u32,
    /// Linear backoff step in milliseconds
    pub retry_base_delay_ms: u64,
}

impl Default for PrayerApiConfig {
    fn default() -> Self {
        Self {
            base_url: prayer_api::DEFAULT_BASE_URL.to_owned(),
            method: CalculationMethod::default(),
            school: JuristicSchool::default(),
            timezone: None,
            request_timeout_secs: retry::DEFAULT_ATTEMPT_TIMEOUT_SECS,
            connect_timeout_secs: retry::DEFAULT_CONNECT_TIMEOUT_SECS,
            max_attempts: retry::DEFAULT_MAX_ATTEMPTS,
            retry_base_delay_ms: retry::DEFAULT_BASE_DELAY_MS,
        }
    }
}

impl PrayerApiConfig {
    /// Load configuration from environment, using defaults for unset or
    /// unparseable values
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_var_or("PRAYER_API_BASE_URL", prayer_api::DEFAULT_BASE_URL),
            method: env::var("PRAYER_API_METHOD")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .and_then(CalculationMethod::from_id)
                .unwrap_or(defaults.method),
            school: env::var("PRAYER_API_SCHOOL")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .and_then(JuristicSchool::from_id)
                .unwrap_or(defaults.school),
            timezone: env::var("PRAYER_API_TIMEZONE")
                .ok()
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty()),
            request_timeout_secs: env::var("PRAYER_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            connect_timeout_secs: env::var("PRAYER_API_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            max_attempts: env::var("PRAYER_API_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_attempts),
            retry_base_delay_ms: env::var("PRAYER_API_RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.retry_base_delay_ms),
        }
    }

    /// Check values that would make every request fail
    ///
    /// # Errors
    ///
    /// Returns a config error for an empty or non-HTTP base URL or a zero timeout
    pub fn validate(&self) -> AppResult<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(AppError::config("PRAYER_API_BASE_URL must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "PRAYER_API_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::config("PRAYER_API_TIMEOUT_SECS must be positive"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(AppError::config(
                "PRAYER_API_CONNECT_TIMEOUT_SECS must be positive",
            ));
        }
        Ok(())
    }

    /// Retry policy described by this configuration
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
            attempt_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = PrayerApiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.method, CalculationMethod::Isna);
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let no_scheme = PrayerApiConfig {
            base_url: "api.aladhan.com".to_owned(),
            ..PrayerApiConfig::default()
        };
        assert!(no_scheme.validate().is_err());

        let zero_timeout = PrayerApiConfig {
            request_timeout_secs: 0,
            ..PrayerApiConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
