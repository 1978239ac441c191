// ABOUTME: Utility modules shared across the library
// ABOUTME: Currently the HTTP client builder used by the prayer-times transport
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

/// HTTP client configuration and helpers
pub mod http_client;
