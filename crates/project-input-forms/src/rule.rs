//! Validation rule describing the constraints on a single field value

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A field value as seen by the validator: either raw text or a number.
///
/// Deserializes from a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
	Text(String),
	Number(f64),
}

impl RuleValue {
	/// Returns the string form of the value.
	///
	/// Text is returned as-is. Numbers are rendered the way a browser
	/// converts a number to a string, so `3.0` becomes `"3"` and
	/// `f64::INFINITY` becomes `"Infinity"`.
	///
	/// # Examples
	///
	/// ```
	/// use project_input_forms::RuleValue;
	///
	/// assert_eq!(RuleValue::from(3.0).string_form(), "3");
	/// assert_eq!(RuleValue::from(2.5).string_form(), "2.5");
	/// assert_eq!(RuleValue::from(" hi ").string_form(), " hi ");
	/// ```
	pub fn string_form(&self) -> Cow<'_, str> {
		match self {
			Self::Text(text) => Cow::Borrowed(text),
			Self::Number(n) => Cow::Owned(number_to_string(*n)),
		}
	}

	/// Returns the numeric reading of the value, if it has one.
	///
	/// Text is trimmed and parsed as a decimal number; empty or
	/// non-numeric text yields `None`.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(n) if n.is_nan() => None,
			Self::Number(n) => Some(*n),
			Self::Text(text) => {
				let trimmed = text.trim();
				if trimmed.is_empty() {
					return None;
				}
				trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
			}
		}
	}
}

impl Default for RuleValue {
	fn default() -> Self {
		Self::Text(String::new())
	}
}

impl fmt::Display for RuleValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.string_form())
	}
}

impl From<String> for RuleValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for RuleValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<f64> for RuleValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<u32> for RuleValue {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

// Shortest round-trip digits, exponent form outside [1e-6, 1e21).
fn number_to_string(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if n == 0.0 {
		return "0".to_string();
	}

	let magnitude = n.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return format!("{n}");
	}

	let formatted = format!("{n:e}");
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => formatted,
	}
}

/// Constraints applied to one field value.
///
/// Every constraint except `value` is optional. Only `required` is
/// consulted by [`crate::validate`]; the length and range constraints are
/// evaluated by [`crate::check`].
///
/// # Examples
///
/// ```
/// use project_input_forms::ValidationRule;
///
/// let rule = ValidationRule::new("Build App").required().min_length(5);
/// assert!(rule.required);
/// assert_eq!(rule.min_length, Some(5));
/// assert_eq!(rule.max, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
	/// The value under validation
	pub value: RuleValue,

	/// Reject values whose trimmed string form is empty
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub required: bool,

	/// Minimum length of the string form, in characters
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,

	/// Maximum length of the string form, in characters
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,

	/// Minimum numeric value
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,

	/// Maximum numeric value
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
}

impl ValidationRule {
	/// Creates a rule with no constraints for the given value.
	pub fn new(value: impl Into<RuleValue>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	/// Marks the value as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Sets the minimum string length.
	pub fn min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Sets the maximum string length.
	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets the minimum numeric value.
	pub fn min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	/// Sets the maximum numeric value.
	pub fn max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}
}
