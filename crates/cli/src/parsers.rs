use std::{fmt::Display, str::FromStr};

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

/// Longest leading-letter run `--min-letters` accepts.
pub const MAX_MIN_LETTERS: usize = 64;

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse `--min-letters`: between 1 and [`MAX_MIN_LETTERS`].
///
/// # Errors
/// Returns an error if the input is not a number or is outside that range.
pub fn parse_min_letters(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(MAX_MIN_LETTERS))
}
