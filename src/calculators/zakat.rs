// ABOUTME: Zakat assessment on cash and gold holdings
// ABOUTME: Applies the 85-unit gold nisab and the 2.5% rate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

use qibla_core::constants::zakat;
use qibla_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Holdings to assess
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZakatInput {
    /// Cash on hand
    pub cash: f64,
    /// Gold held, in the same unit the price is quoted per
    pub gold_weight: f64,
    /// Price of one unit of gold
    pub gold_price: f64,
}

impl Default for ZakatInput {
    fn default() -> Self {
        Self {
            cash: 0.0,
            gold_weight: 0.0,
            gold_price: zakat::DEFAULT_GOLD_PRICE,
        }
    }
}

/// Result of a zakat assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZakatAssessment {
    /// Cash plus gold valued at `gold_price`
    pub total_wealth: f64,
    /// Threshold below which no zakat is due
    pub nisab: f64,
    /// Whether `total_wealth` reaches the nisab
    pub is_due: bool,
    /// Amount payable, zero when not due
    pub zakat_due: f64,
}

/// Assess zakat on cash and gold
///
/// # Errors
///
/// Returns an error if any input is negative or not finite, or the gold
/// price is zero
pub fn assess_zakat(input: &ZakatInput) -> AppResult<ZakatAssessment> {
    for (name, value) in [
        ("cash", input.cash),
        ("gold_weight", input.gold_weight),
        ("gold_price", input.gold_price),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }
    if input.gold_price <= 0.0 {
        return Err(AppError::invalid_input("gold_price must be positive"));
    }

    let nisab = zakat::NISAB_GOLD_UNITS * input.gold_price;
    let total_wealth = input.cash + input.gold_weight * input.gold_price;
    let is_due = total_wealth >= nisab;

    Ok(ZakatAssessment {
        total_wealth,
        nisab,
        is_due,
        zakat_due: if is_due { total_wealth * zakat::RATE } else { 0.0 },
    })
}
