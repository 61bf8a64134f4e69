//! Parsing of user-entered numbers.
//!
//! Form text may contain thousands separators ("5,000"). Empty, non-numeric and
//! negative entries are rejected with a `PondforgeError`; calculators take the
//! `Option` view where any of those simply means "not provided yet". Zero is a
//! legitimate parsed value and is never confused with "unset".

use crate::error::PondforgeError;
use pondforge_schemas::file_formats::RawInput;
use tracing::{debug, warn};

/// Parses decimal text, stripping thousands separators.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64, PondforgeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PondforgeError::EmptyInput {
            field: field.to_string(),
        });
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let value = cleaned
        .parse::<f64>()
        .map_err(|_| PondforgeError::NotNumeric {
            field: field.to_string(),
            raw: text.to_string(),
        })?;
    check_number(field, value, text)
}

pub fn parse_raw(field: &str, raw: &RawInput) -> Result<f64, PondforgeError> {
    match raw {
        RawInput::Number(value) => check_number(field, *value, &value.to_string()),
        RawInput::Text(text) => parse_decimal(field, text),
    }
}

fn check_number(field: &str, value: f64, raw: &str) -> Result<f64, PondforgeError> {
    if !value.is_finite() {
        return Err(PondforgeError::NotNumeric {
            field: field.to_string(),
            raw: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(PondforgeError::NegativeInput {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Checks an already-typed number the same way form text is checked:
/// non-finite and negative values are rejected.
pub fn check_value(field: &str, value: f64) -> Result<f64, PondforgeError> {
    check_number(field, value, &value.to_string())
}

/// Rejects values outside `min..=max` with an `OutOfRange` error.
pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), PondforgeError> {
    if !(min..=max).contains(&value) {
        warn!(field, value, min, max, "value outside accepted range, result suppressed");
        return Err(PondforgeError::out_of_range(field, value, min, max));
    }
    Ok(())
}

/// The "parse or none" view of an optional form field.
pub fn provided(field: &str, raw: Option<&RawInput>) -> Option<f64> {
    let raw = raw?;
    match parse_raw(field, raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(field, %err, "input treated as not provided");
            None
        }
    }
}

/// Like [`provided`] but additionally treats zero as not provided, for fields
/// that act as multipliers or denominators.
pub fn provided_positive(field: &str, raw: Option<&RawInput>) -> Option<f64> {
    provided(field, raw).filter(|value| *value > 0.0)
}
