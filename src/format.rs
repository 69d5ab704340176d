//! Human-readable byte counts.
//!
//! Sizes scale by 1024 per step but keep the short `KB`/`MB`/... labels that
//! users expect to see in a UI.

use tracing::trace;

use crate::error::FormatError;
use crate::model::Unit;

pub const DEFAULT_DECIMALS: i32 = 2;

/// Largest precision the rounding step accepts.
pub const MAX_DECIMALS: i32 = 100;

const BASE: f64 = 1024.0;

/// Format `bytes` with [`DEFAULT_DECIMALS`] places.
pub fn format_size(bytes: impl Into<Option<f64>>) -> String {
    format_bytes(bytes, DEFAULT_DECIMALS)
}

/// Format a byte count into `"<value> <unit>"`.
///
/// Zero, `None` and NaN all yield `"0 Bytes"`. Trailing zeros are dropped, so
/// `format_bytes(2048.0, 2)` is `"2 KB"`. Magnitudes past the `YB` row are
/// expressed in `YB`.
pub fn format_bytes(bytes: impl Into<Option<f64>>, decimals: i32) -> String {
    let bytes = match bytes.into() {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => return zero(),
    };

    let index = unit_index(bytes).min(Unit::YB.index());
    render(bytes, index, decimals)
}

/// Like [`format_bytes`] but rejects values that do not fit the unit table.
pub fn try_format_bytes(
    bytes: impl Into<Option<f64>>,
    decimals: i32,
) -> Result<String, FormatError> {
    let bytes = match bytes.into() {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => return Ok(zero()),
    };
    if bytes.is_infinite() {
        return Err(FormatError::NonFinite(bytes));
    }

    let index = unit_index(bytes);
    if index > Unit::YB.index() {
        return Err(FormatError::OutOfRange { bytes });
    }
    Ok(render(bytes, index, decimals))
}

fn zero() -> String {
    format!("0 {}", Unit::Bytes)
}

/// Position in the unit table for a non-zero byte count. Sub-byte magnitudes
/// stay in `Bytes`.
fn unit_index(bytes: f64) -> usize {
    let magnitude = bytes.abs();
    if magnitude.is_infinite() {
        return usize::MAX;
    }

    let exponent = (magnitude.ln() / BASE.ln()).floor();
    let mut index = if exponent <= 0.0 { 0 } else { exponent as usize };

    // The log ratio can land one step off at exact powers of 1024.
    while index > 0 && magnitude < BASE.powi(index as i32) {
        index -= 1;
    }
    while magnitude >= BASE.powi(index as i32 + 1) {
        index += 1;
    }
    index
}

fn render(bytes: f64, index: usize, decimals: i32) -> String {
    let unit = Unit::ALL[index];
    let scaled = bytes / BASE.powi(index as i32);
    let places = decimals.clamp(0, MAX_DECIMALS) as usize;
    let value = round_to(scaled, places);
    trace!(bytes, %unit, scaled, value, "formatted byte count");
    format!("{} {unit}", number_text(value))
}

/// Shortest decimal spelling of `value`, switching to exponent form below
/// `1e-6` and from `1e21` up (`1e-7`, `1.5e+21`).
fn number_text(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Round to `places` fractional digits, ties away from zero, working on the
/// exact decimal expansion of `value` so results like `1.005 -> 1` match
/// what the stored binary value actually is.
fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Every finite f64 has an exact decimal expansion within 1074 fractional digits.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(places)).collect();
    let round_up = frac_part.as_bytes().get(places).is_some_and(|digit| *digit >= b'5');
    if round_up {
        increment(&mut digits);
    }

    let split = digits.len() - places;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.push_str(std::str::from_utf8(&digits[..split]).unwrap_or("0"));
    if places > 0 {
        text.push('.');
        text.push_str(std::str::from_utf8(&digits[split..]).unwrap_or("0"));
    }

    // Normalise "-0" so a tiny negative rounds to a plain zero.
    match text.parse::<f64>() {
        Ok(parsed) if parsed == 0.0 => 0.0,
        Ok(parsed) => parsed,
        Err(_) => value,
    }
}

/// Add one to an ASCII decimal digit string, growing it on carry-out.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
