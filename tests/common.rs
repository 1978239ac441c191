// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Scripted timings transports, sample upstream bodies and fixed places
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `qibla_times`

use async_trait::async_trait;
use chrono::NaiveDate;
use qibla_times::external::{PrayerFetchError, TimingsRequest, TimingsResponse, TimingsTransport};
use qibla_times::models::GeoPoint;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const BANGKOK: GeoPoint = GeoPoint::new(13.7563, 100.5018);

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Typical upstream body, with the timezone suffix the service adds to times
pub fn sample_body() -> Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "04:58 (+07)",
                "Sunrise": "06:17 (+07)",
                "Dhuhr": "12:15 (+07)",
                "Asr": "15:37 (+07)",
                "Sunset": "18:13 (+07)",
                "Maghrib": "18:13 (+07)",
                "Isha": "19:27 (+07)",
                "Imsak": "04:48 (+07)",
                "Midnight": "00:15 (+07)"
            },
            "date": {
                "readable": "14 Mar 2025",
                "timestamp": "1741910400",
                "hijri": {
                    "date": "14-09-1446",
                    "day": "14",
                    "month": { "number": 9, "en": "Ramaḍān", "ar": "رَمَضان" },
                    "year": "1446"
                }
            },
            "meta": { "latitude": 13.7563, "longitude": 100.5018 }
        }
    })
}

pub fn sample_response() -> TimingsResponse {
    serde_json::from_value(sample_body()).expect("sample body parses")
}

/// What one scripted attempt does
#[derive(Debug, Clone)]
pub enum Step {
    /// Answer with the sample response
    Succeed,
    /// Fail immediately
    Fail(PrayerFetchError),
    /// Never answer within `Duration`
    Hang(Duration),
}

/// Transport that plays back a script and records when each call started
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<(Instant, TimingsRequest)>>,
}

impl ScriptedTransport {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Transport whose every attempt fails with `error`
    pub fn always_failing(error: PrayerFetchError, times: usize) -> Arc<Self> {
        Self::new(std::iter::repeat(Step::Fail(error)).take(times))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_instants(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    pub fn requests(&self) -> Vec<TimingsRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }
}

#[async_trait]
impl TimingsTransport for ScriptedTransport {
    async fn get_timings(
        &self,
        request: &TimingsRequest,
    ) -> Result<TimingsResponse, PrayerFetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), request.clone()));
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Succeed) => Ok(sample_response()),
            Some(Step::Fail(error)) => Err(error),
            Some(Step::Hang(duration)) => {
                tokio::time::sleep(duration).await;
                Ok(sample_response())
            }
            None => Err(PrayerFetchError::Network("script exhausted".to_owned())),
        }
    }
}

/// Serve one canned HTTP/1.1 response on a loopback port.
///
/// Returns the base URL to point a transport at and a handle resolving to
/// the request head the server received.
pub async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..read]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&head).into_owned()
    });

    (base_url, handle)
}
