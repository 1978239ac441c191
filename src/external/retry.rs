// ABOUTME: Linear-backoff retry policy for upstream requests
// ABOUTME: Computes the wait before each attempt and the per-attempt timeout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use qibla_core::constants::retry;
use std::time::Duration;

/// How many times to try an upstream call and how long to wait between tries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero behaves like one.
    pub max_attempts: u32,
    /// Delay unit; attempt `i` (0-based) waits `i * base_delay` before starting
    pub base_delay: Duration,
    /// Upper bound on a single attempt, not counting the backoff wait
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retry::DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(retry::DEFAULT_BASE_DELAY_MS),
            attempt_timeout: Duration::from_secs(retry::DEFAULT_ATTEMPT_TIMEOUT_SECS),
        }
    }
}

impl RetryPolicy {
    /// Number of attempts actually made
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }

    /// Wait before attempt `attempt` (0-based): 0, 1x, 2x, ... the base delay
    #[must_use]
    pub fn delay_before(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}
