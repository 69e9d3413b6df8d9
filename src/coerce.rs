//! Typed parsing of raw option values.
//!
//! Every option value arrives as a string. The helpers here turn it into the
//! list, number or boolean a field expects and report a [`CoerceError`] when
//! the text does not fit. They do not know about field ranges; those are
//! checked by the setter.

use std::str::FromStr;
use thiserror::Error;

/// Failure to read a raw value as the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// The token is not a number of the requested kind.
    #[error("{0:?} is not numeric")]
    NotNumeric(String),
    /// The token is not a recognised boolean literal.
    #[error("{0:?} is not a boolean")]
    NotBoolean(String),
}

/// Splits a list value on commas and/or whitespace.
///
/// Empty pieces are dropped, so `"a,,b"`, `"a, b"` and `" a b "` all give
/// `["a", "b"]`.
///
/// # Example
///
/// ```rust, ignore
/// use prsice::coerce::split_list;
///
/// assert_eq!(split_list("base1.txt, base2.txt"), vec!["base1.txt", "base2.txt"]);
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a number, trimming surrounding whitespace first.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, CoerceError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| CoerceError::NotNumeric(raw.to_string()))
}

/// Parses a boolean literal. Accepts `true/false`, `t/f`, `yes/no`, `y/n`,
/// `on/off` and `1/0` in any case.
pub fn parse_bool(raw: &str) -> Result<bool, CoerceError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(CoerceError::NotBoolean(raw.to_string())),
    }
}

/// Splits a list value and parses each token with `parse`.
///
/// All-or-nothing: the first bad token fails the whole value.
pub fn parse_list<T, F>(raw: &str, parse: F) -> Result<Vec<T>, CoerceError>
where
    F: Fn(&str) -> Result<T, CoerceError>,
{
    split_list(raw).iter().map(|token| parse(token.as_str())).collect()
}
