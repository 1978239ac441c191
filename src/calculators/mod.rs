// ABOUTME: Islamic finance calculators shown alongside the qibla and prayer pages
// ABOUTME: Zakat on cash and gold, simplified inheritance shares, amount formatting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! Calculators
//!
//! Pure functions over caller-supplied amounts. Inputs are validated and
//! rejected with [`AppError::invalid_input`](qibla_core::errors::AppError::invalid_input)
//! rather than clamped.

pub mod amount;
pub mod inheritance;
pub mod zakat;

pub use amount::{format_amount, parse_amount};
pub use inheritance::{distribute_estate, EstateDistribution, EstateInput, Heir, HeirShare};
pub use zakat::{assess_zakat, ZakatAssessment, ZakatInput};
