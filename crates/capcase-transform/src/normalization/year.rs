//! Two-digit year disambiguation.
//!
//! Raw execution dates end in a two-digit year (`"01/01/87"`). The century is
//! inferred from a fixed pivot: years above the pivot are 19xx, the rest are
//! 20xx. The rule is not idempotent (`"1905"` comes back as `"2005"`), so it
//! runs exactly once per value.

use thiserror::Error;

/// Why a raw date could not be turned into a four-digit year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("date '{value}' is too short to hold a two-digit year")]
    TooShort { value: String },

    #[error("date '{value}' does not end in a two-digit year")]
    NotNumeric { value: String },
}

/// Returns the four-digit year encoded by the last two characters of `raw`.
///
/// # Examples
///
/// ```
/// use capcase_transform::disambiguate_year;
///
/// assert_eq!(disambiguate_year("01/01/87", 24).unwrap(), "1987");
/// assert_eq!(disambiguate_year("02/02/05", 24).unwrap(), "2005");
/// assert_eq!(disambiguate_year("24", 24).unwrap(), "2024");
/// assert_eq!(disambiguate_year("25", 24).unwrap(), "1925");
/// ```
///
/// # Errors
///
/// Fails when `raw` is shorter than two characters or its last two
/// characters are not both ASCII digits.
pub fn disambiguate_year(raw: &str, pivot: u8) -> Result<String, YearError> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < 2 {
        return Err(YearError::TooShort {
            value: raw.to_string(),
        });
    }
    let two_digit: String = chars[chars.len() - 2..].iter().collect();
    if !two_digit.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(YearError::NotNumeric {
            value: raw.to_string(),
        });
    }
    let yy: u8 = two_digit.parse().map_err(|_| YearError::NotNumeric {
        value: raw.to_string(),
    })?;
    let century = if yy > pivot { "19" } else { "20" };
    Ok(format!("{century}{two_digit}"))
}
