//! Rule evaluators
//!
//! Two evaluators share [`ValidationRule`]:
//!
//! - [`validate`] answers yes/no and only looks at `required`. Length and
//!   range constraints on the rule are carried but not consulted.
//! - [`check`] evaluates every constraint that is present and reports the
//!   first one violated.
//!
//! [`ConstraintMode`] picks one of the two at runtime.

use crate::rule::ValidationRule;
use serde::{Deserialize, Serialize};

/// A constraint violated by a field value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleViolation {
	#[error("This field is required")]
	Required,
	#[error("Ensure this value has at least {min} characters (it has {actual})")]
	TooShort { min: usize, actual: usize },
	#[error("Ensure this value has at most {max} characters (it has {actual})")]
	TooLong { max: usize, actual: usize },
	#[error("Ensure this value is greater than or equal to {min}")]
	BelowMin { min: f64 },
	#[error("Ensure this value is less than or equal to {max}")]
	AboveMax { max: f64 },
	#[error("Enter a number")]
	NotNumeric,
}

/// Returns `false` only when the rule is required and the trimmed string
/// form of its value is empty.
///
/// # Examples
///
/// ```
/// use project_input_forms::{ValidationRule, validate};
///
/// assert!(validate(&ValidationRule::new("x").required()));
/// assert!(!validate(&ValidationRule::new("\t\n").required()));
/// // min_length is not consulted here
/// assert!(validate(&ValidationRule::new("x").required().min_length(5)));
/// ```
pub fn validate(rule: &ValidationRule) -> bool {
	let mut is_valid = true;
	if rule.required {
		is_valid = is_valid && !rule.value.string_form().trim().is_empty();
	}
	is_valid
}

/// Evaluates every constraint present on the rule.
///
/// Checks run in the order required, min_length, max_length, min, max and
/// stop at the first violation. Lengths count the characters of the
/// trimmed string form. An optional value that is empty after trimming
/// passes without further checks.
///
/// # Examples
///
/// ```
/// use project_input_forms::{RuleViolation, ValidationRule, check};
///
/// let rule = ValidationRule::new("Demo").required().min_length(5);
/// assert_eq!(
///     check(&rule),
///     Err(RuleViolation::TooShort { min: 5, actual: 4 })
/// );
/// assert!(check(&ValidationRule::new("").min_length(5)).is_ok());
/// ```
pub fn check(rule: &ValidationRule) -> Result<(), RuleViolation> {
	let form = rule.value.string_form();
	let trimmed = form.trim();

	if trimmed.is_empty() {
		return if rule.required {
			Err(RuleViolation::Required)
		} else {
			Ok(())
		};
	}

	let length = trimmed.chars().count();
	if let Some(min) = rule.min_length
		&& length < min
	{
		return Err(RuleViolation::TooShort {
			min,
			actual: length,
		});
	}
	if let Some(max) = rule.max_length
		&& length > max
	{
		return Err(RuleViolation::TooLong {
			max,
			actual: length,
		});
	}

	if rule.min.is_none() && rule.max.is_none() {
		return Ok(());
	}

	let number = rule.value.as_number().ok_or(RuleViolation::NotNumeric)?;
	if let Some(min) = rule.min
		&& number < min
	{
		return Err(RuleViolation::BelowMin { min });
	}
	if let Some(max) = rule.max
		&& number > max
	{
		return Err(RuleViolation::AboveMax { max });
	}

	Ok(())
}

/// Selects which evaluator a form applies to its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintMode {
	/// Only `required` is evaluated ([`validate`])
	#[default]
	RequiredOnly,
	/// Every present constraint is evaluated ([`check`])
	Enforced,
}

impl ConstraintMode {
	/// Evaluates the rule under this mode.
	pub fn evaluate(self, rule: &ValidationRule) -> Result<(), RuleViolation> {
		match self {
			Self::RequiredOnly if validate(rule) => Ok(()),
			Self::RequiredOnly => Err(RuleViolation::Required),
			Self::Enforced => check(rule),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Build App", true)]
	#[case("  padded  ", true)]
	#[case("", false)]
	#[case("   ", false)]
	#[case("\t\r\n", false)]
	fn test_validate_required_text(#[case] value: &str, #[case] expected: bool) {
		// Arrange
		let rule = ValidationRule::new(value).required();

		// Act
		let result = validate(&rule);

		// Assert
		assert_eq!(result, expected, "value {value:?}");
	}

	#[rstest]
	fn test_validate_required_number_is_never_empty() {
		assert!(validate(&ValidationRule::new(0.0).required()));
		assert!(validate(&ValidationRule::new(f64::NAN).required()));
	}

	#[rstest]
	fn test_validate_ignores_length_and_range_constraints() {
		// Arrange
		let rule = ValidationRule::new("ab")
			.required()
			.min_length(5)
			.max_length(1)
			.min(100.0)
			.max(-100.0);

		// Act + Assert
		assert!(validate(&rule));
	}

	#[rstest]
	fn test_check_required_empty() {
		// Arrange
		let rule = ValidationRule::new("  ").required();

		// Act
		let result = check(&rule);

		// Assert
		assert_eq!(result, Err(RuleViolation::Required));
	}

	#[rstest]
	fn test_check_optional_empty_skips_other_constraints() {
		let rule = ValidationRule::new("").min_length(5).min(1.0);
		assert_eq!(check(&rule), Ok(()));
	}

	#[rstest]
	#[case("abcd", Err(RuleViolation::TooShort { min: 5, actual: 4 }))]
	#[case("abcde", Ok(()))]
	#[case("  abcd  ", Err(RuleViolation::TooShort { min: 5, actual: 4 }))]
	#[case("ünïcö", Ok(()))]
	#[case("abcdefghijk", Err(RuleViolation::TooLong { max: 10, actual: 11 }))]
	fn test_check_lengths(#[case] value: &str, #[case] expected: Result<(), RuleViolation>) {
		// Arrange
		let rule = ValidationRule::new(value).min_length(5).max_length(10);

		// Act
		let result = check(&rule);

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	#[case("3", Ok(()))]
	#[case("0", Err(RuleViolation::BelowMin { min: 1.0 }))]
	#[case("11", Err(RuleViolation::AboveMax { max: 10.0 }))]
	#[case("many", Err(RuleViolation::NotNumeric))]
	fn test_check_range_on_text(#[case] value: &str, #[case] expected: Result<(), RuleViolation>) {
		// Arrange
		let rule = ValidationRule::new(value).required().min(1.0).max(10.0);

		// Act
		let result = check(&rule);

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	fn test_check_range_on_number() {
		let rule = ValidationRule::new(12.0).max(10.0);
		assert_eq!(check(&rule), Err(RuleViolation::AboveMax { max: 10.0 }));
	}

	#[rstest]
	fn test_constraint_mode_required_only_matches_validate() {
		// Arrange
		let short = ValidationRule::new("abc").required().min_length(5);
		let blank = ValidationRule::new(" ").required().min_length(5);

		// Act + Assert
		assert_eq!(ConstraintMode::RequiredOnly.evaluate(&short), Ok(()));
		assert_eq!(
			ConstraintMode::RequiredOnly.evaluate(&blank),
			Err(RuleViolation::Required)
		);
	}

	#[rstest]
	fn test_constraint_mode_enforced_matches_check() {
		let short = ValidationRule::new("abc").required().min_length(5);
		assert_eq!(
			ConstraintMode::Enforced.evaluate(&short),
			Err(RuleViolation::TooShort { min: 5, actual: 3 })
		);
	}

	#[rstest]
	fn test_violation_messages() {
		assert_eq!(RuleViolation::Required.to_string(), "This field is required");
		assert_eq!(
			RuleViolation::TooShort { min: 5, actual: 2 }.to_string(),
			"Ensure this value has at least 5 characters (it has 2)"
		);
	}

	#[rstest]
	fn test_constraint_mode_default_is_required_only() {
		assert_eq!(ConstraintMode::default(), ConstraintMode::RequiredOnly);
	}
}
