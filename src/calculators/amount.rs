// ABOUTME: Parsing and formatting of money amounts with thousands separators
// ABOUTME: Accepts "32,000" style input and renders grouped output with up to 2 decimals
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Qibla Times contributors

/// Parse an amount typed with optional comma thousands separators.
///
/// Returns `None` for blank, non-numeric or non-finite text.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount with comma-grouped integer digits and at most two
/// decimals, dropping trailing zeros (`1234.5` becomes `"1,234.5"`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("32,000"), Some(32_000.0));
        assert_eq!(parse_amount(" 1,234.5 "), Some(1_234.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(32_000.0), "32,000");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(68_000.5), "68,000.5");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-1_500.0), "-1,500");
    }
}
