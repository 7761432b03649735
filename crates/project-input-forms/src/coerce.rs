//! Numeric coercion of raw input text
//!
//! Input elements always hand back strings. The people field is read the
//! way a browser's unary `+` reads a string, then narrowed to a
//! non-negative integer.

/// Why a string could not be read as a count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
	#[error("'{0}' is not a number")]
	NotANumber(String),
	#[error("'{0}' is not a whole number")]
	NotAnInteger(String),
	#[error("'{0}' must not be negative")]
	Negative(String),
	#[error("'{0}' is too large")]
	OutOfRange(String),
}

/// Reads `raw` as a non-negative whole number.
///
/// Surrounding whitespace is ignored and an empty string reads as `0`.
/// Decimal notation (sign, fraction, exponent) and `0x`/`0o`/`0b`
/// prefixed integers are accepted as long as the resulting number is a
/// whole number in `0..=u32::MAX`.
///
/// # Examples
///
/// ```
/// use project_input_forms::{CoercionError, coerce_count};
///
/// assert_eq!(coerce_count(" 3 "), Ok(3));
/// assert_eq!(coerce_count(""), Ok(0));
/// assert_eq!(coerce_count("4e1"), Ok(40));
/// assert_eq!(coerce_count("0x10"), Ok(16));
/// assert!(matches!(coerce_count("2.5"), Err(CoercionError::NotAnInteger(_))));
/// assert!(matches!(coerce_count("three"), Err(CoercionError::NotANumber(_))));
/// ```
pub fn coerce_count(raw: &str) -> Result<u32, CoercionError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Ok(0);
	}

	if let Some(radix_value) = parse_prefixed(trimmed) {
		let value = radix_value.ok_or_else(|| CoercionError::NotANumber(raw.to_string()))?;
		return u32::try_from(value).map_err(|_| CoercionError::OutOfRange(raw.to_string()));
	}

	let number = parse_decimal(trimmed).ok_or_else(|| CoercionError::NotANumber(raw.to_string()))?;
	if number.is_infinite() {
		return Err(if number > 0.0 {
			CoercionError::OutOfRange(raw.to_string())
		} else {
			CoercionError::Negative(raw.to_string())
		});
	}
	if number.fract() != 0.0 {
		return Err(CoercionError::NotAnInteger(raw.to_string()));
	}
	if number < 0.0 {
		return Err(CoercionError::Negative(raw.to_string()));
	}
	if number > f64::from(u32::MAX) {
		return Err(CoercionError::OutOfRange(raw.to_string()));
	}

	// Whole, non-negative and within u32 range at this point.
	Ok(number as u32)
}

// `None` when the text has no radix prefix, `Some(None)` when the digits
// after a prefix are invalid or overflow.
fn parse_prefixed(text: &str) -> Option<Option<u64>> {
	let (radix, digits) = match text.get(..2) {
		Some("0x" | "0X") => (16, &text[2..]),
		Some("0o" | "0O") => (8, &text[2..]),
		Some("0b" | "0B") => (2, &text[2..]),
		_ => return None,
	};
	if digits.is_empty() || digits.starts_with(['+', '-']) {
		return Some(None);
	}
	Some(u64::from_str_radix(digits, radix).ok())
}

fn parse_decimal(text: &str) -> Option<f64> {
	match text {
		"Infinity" | "+Infinity" => return Some(f64::INFINITY),
		"-Infinity" => return Some(f64::NEG_INFINITY),
		_ => {}
	}
	// Rust's float parser also accepts "inf" and "nan", which are not
	// numbers here.
	if !text
		.chars()
		.all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
	{
		return None;
	}
	text.parse::<f64>().ok()
}
