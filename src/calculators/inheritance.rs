// ABOUTME: Simplified faraid estate distribution among close heirs
// ABOUTME: Fixed spouse and parent shares, residue split 2:1 between sons and daughters
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

//! Inheritance Calculator
//!
//! Covers only the common case of spouse, parents and children:
//!
//! - Spouse: 1/8 with children, 1/4 without
//! - Father and mother: 1/6 each, only when there are children
//! - Children: the remainder, in units of 2 per son and 1 per daughter
//!
//! Without children nobody takes the residue here, so it is reported as
//! undistributed rather than guessed at.

use qibla_core::constants::inheritance;
use qibla_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Family of the deceased
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstateInput {
    /// Net estate after debts and bequests
    pub estate: f64,
    /// Whether a spouse survives
    pub has_spouse: bool,
    /// Number of sons
    pub sons: u32,
    /// Number of daughters
    pub daughters: u32,
    /// Whether both parents survive
    pub has_parents: bool,
}

/// Heir group receiving a share
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heir {
    /// Surviving spouse
    Spouse,
    /// Father
    Father,
    /// Mother
    Mother,
    /// All sons together
    Sons,
    /// All daughters together
    Daughters,
}

/// One line of the distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeirShare {
    /// Heir group
    pub heir: Heir,
    /// Thai display label, with a head count for children
    pub label: String,
    /// Share as displayed, e.g. `"1/8"` or `"2 ส่วน/คน"`
    pub share_label: String,
    /// Amount for the whole group
    pub amount: f64,
}

/// Distribution of an estate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstateDistribution {
    /// Shares in display order
    pub shares: Vec<HeirShare>,
    /// Residue not assigned to any heir listed here
    pub undistributed: f64,
}

impl EstateDistribution {
    /// Sum of every share
    #[must_use]
    pub fn total_distributed(&self) -> f64 {
        self.shares.iter().map(|s| s.amount).sum()
    }
}

/// Split an estate among spouse, parents and children
///
/// # Errors
///
/// Returns an error if the estate is not a positive finite amount
pub fn distribute_estate(input: &EstateInput) -> AppResult<EstateDistribution> {
    let estate = input.estate;
    if !estate.is_finite() || estate <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "estate must be a positive amount, got {estate}"
        )));
    }

    let has_children = input.sons > 0 || input.daughters > 0;
    let mut shares = Vec::new();
    let mut remaining = estate;

    if input.has_spouse {
        let (fraction, share_label) = if has_children {
            (inheritance::SPOUSE_WITH_CHILDREN, "1/8")
        } else {
            (inheritance::SPOUSE_WITHOUT_CHILDREN, "1/4")
        };
        let amount = estate * fraction;
        shares.push(HeirShare {
            heir: Heir::Spouse,
            label: "คู่สมรส".to_owned(),
            share_label: share_label.to_owned(),
            amount,
        });
        remaining -= amount;
    }

    if input.has_parents && has_children {
        let amount = estate * inheritance::PARENT_WITH_CHILDREN;
        for (heir, label) in [(Heir::Father, "บิดา"), (Heir::Mother, "มารดา")] {
            shares.push(HeirShare {
                heir,
                label: label.to_owned(),
                share_label: "1/6".to_owned(),
                amount,
            });
            remaining -= amount;
        }
    }

    if !has_children {
        return Ok(EstateDistribution {
            shares,
            undistributed: remaining,
        });
    }

    // Units are counted in f64 so any heir count stays representable
    let son_units = f64::from(input.sons) * f64::from(inheritance::SON_UNITS);
    let daughter_units = f64::from(input.daughters) * f64::from(inheritance::DAUGHTER_UNITS);
    let unit_value = remaining / (son_units + daughter_units);

    if input.sons > 0 {
        shares.push(HeirShare {
            heir: Heir::Sons,
            label: format!("บุตรชาย ({} คน)", input.sons),
            share_label: format!("{} ส่วน/คน", inheritance::SON_UNITS),
            amount: unit_value * son_units,
        });
    }
    if input.daughters > 0 {
        shares.push(HeirShare {
            heir: Heir::Daughters,
            label: format!("บุตรสาว ({} คน)", input.daughters),
            share_label: format!("{} ส่วน/คน", inheritance::DAUGHTER_UNITS),
            amount: unit_value * daughter_units,
        });
    }

    Ok(EstateDistribution {
        shares,
        undistributed: 0.0,
    })
}
