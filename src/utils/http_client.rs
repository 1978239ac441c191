// ABOUTME: HTTP client construction with timeout configuration
// ABOUTME: Builds the pooled reqwest client used for upstream timings requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// The client pools connections and is cheap to clone, so one instance
/// should be shared by every request a component makes.
///
/// # Arguments
/// * `timeout_secs` - Request timeout in seconds
/// * `connect_timeout_secs` - Connection timeout in seconds
///
/// # Returns
/// A new `reqwest::Client`, or a default client if the builder fails
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}
