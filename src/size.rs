// src/size.rs
//! Conversion of upstream size strings (`"12MB"`) into byte counts.
//!
//! Units are decimal: the upstream format reports `1KB` for 1000 bytes and
//! output compatibility depends on keeping it that way.

use crate::error::{Result, ScanHealthError};

/// Size value the upstream service reports when it could not measure a module.
pub const UNKNOWN_SIZE: &str = "N/A";

/// Unit suffixes in match priority order.
const UNITS: [(&str, u64); 3] = [
    ("GB", 1_000_000_000),
    ("MB", 1_000_000),
    ("KB", 1_000),
];

/// Converts a size string such as `"12MB"` into bytes.
///
/// Empty strings, [`UNKNOWN_SIZE`] and values without a recognised unit
/// suffix are unsized and yield `0`.
///
/// # Errors
/// Returns [`ScanHealthError::MalformedSize`] if the text before a recognised
/// suffix is not an unsigned integer, or the byte count overflows.
pub fn normalize_size(raw: &str) -> Result<u64> {
    if raw.is_empty() || raw == UNKNOWN_SIZE {
        return Ok(0);
    }

    let Some((number, multiplier)) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| raw.strip_suffix(*suffix).map(|n| (n, *multiplier)))
    else {
        return Ok(0);
    };

    let value: u64 = number.parse().map_err(|e: std::num::ParseIntError| {
        ScanHealthError::MalformedSize {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| ScanHealthError::MalformedSize {
            raw: raw.to_string(),
            reason: "byte count overflows".to_string(),
        })
}

/// Formats a byte count with the largest unit it reaches, rounding down.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    UNITS
        .iter()
        .find(|(_, multiplier)| bytes >= *multiplier)
        .map_or_else(
            || format!("{bytes} bytes"),
            |(suffix, multiplier)| format!("{}{suffix}", bytes / multiplier),
        )
}
