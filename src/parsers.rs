// src/parsers.rs
use std::{fmt::Display, str::FromStr};

use manga_volumes_shared_kernel::VolumeNumber;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `u32` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_u32(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a manga id. Ids start at 1.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_manga_id(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, None)
}

/// Strictly parse one volume number for commands that take explicit numbers.
///
/// # Errors
/// Returns the domain error message for `0`, negatives and non-numbers.
pub fn parse_volume_number(s: &str) -> Result<VolumeNumber, String> {
    s.parse::<VolumeNumber>().map_err(|err| err.to_string())
}
