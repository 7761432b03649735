//! Form configuration
//!
//! [`FormConfig`] names the elements the form binds to and selects the
//! validation behavior. Its defaults describe the stock host page: a
//! `#project-input` template rendered into `#app` as `#user-input`.
//!
//! ## Example
//!
//! ```
//! use project_input_pages::config::{BranchPolicy, FormConfig};
//!
//! let config = FormConfig::from_toml_str(
//!     r#"
//!     host_id = "sidebar"
//!     branch_policy = "inverted"
//!
//!     [fields]
//!     people = "team-size"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.host_id, "sidebar");
//! assert_eq!(config.template_id, "project-input");
//! assert_eq!(config.fields.people, "team-size");
//! assert_eq!(config.branch_policy, BranchPolicy::Inverted);
//! ```

use project_input_forms::ConstraintMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE_ID: &str = "project-input";
pub const DEFAULT_HOST_ID: &str = "app";
pub const DEFAULT_FORM_ID: &str = "user-input";
pub const DEFAULT_ALERT_MESSAGE: &str = "Invalid input, please try again";
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// Errors raised while loading or checking a [`FormConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid TOML configuration: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("Invalid JSON configuration: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Configuration key '{key}' has invalid element id '{id}'")]
	InvalidId { key: &'static str, id: String },
	#[error("Element id '{0}' is bound to more than one field")]
	DuplicateFieldId(String),
}

/// How the outcome of field validation maps to accepting the submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchPolicy {
	/// Accept when every field passes, alert when any field fails.
	#[default]
	Corrected,
	/// Alert when every field passes, accept when any field fails.
	Inverted,
}

/// Element ids of the three bound inputs, looked up inside the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldIds {
	pub title: String,
	pub description: String,
	pub people: String,
}

impl Default for FieldIds {
	fn default() -> Self {
		Self {
			title: "title".to_string(),
			description: "description".to_string(),
			people: "people".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
	/// Id of the `<template>` holding the form markup
	pub template_id: String,
	/// Id of the container the form is inserted into
	pub host_id: String,
	/// Id assigned to the inserted form element
	pub form_id: String,
	pub fields: FieldIds,
	/// Text of the blocking alert shown on rejected input
	pub alert_message: String,
	pub branch_policy: BranchPolicy,
	pub constraint_mode: ConstraintMode,
	/// `min_length` attached to every field rule
	pub min_length: usize,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			template_id: DEFAULT_TEMPLATE_ID.to_string(),
			host_id: DEFAULT_HOST_ID.to_string(),
			form_id: DEFAULT_FORM_ID.to_string(),
			fields: FieldIds::default(),
			alert_message: DEFAULT_ALERT_MESSAGE.to_string(),
			branch_policy: BranchPolicy::default(),
			constraint_mode: ConstraintMode::default(),
			min_length: DEFAULT_MIN_LENGTH,
		}
	}
}

impl FormConfig {
	/// Parses and validates a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Parses and validates a JSON document. Missing keys take their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use project_input_pages::config::FormConfig;
	///
	/// let config = FormConfig::from_json_str(r#"{"alert_message": "Check the form"}"#).unwrap();
	/// assert_eq!(config.alert_message, "Check the form");
	/// assert!(FormConfig::from_json_str(r#"{"form_id": "has space"}"#).is_err());
	/// ```
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads the value of a `data-config` attribute as JSON. An absent
	/// attribute means the defaults.
	pub fn from_data_config(attribute: Option<&str>) -> Result<Self, ConfigError> {
		match attribute {
			Some(raw) => Self::from_json_str(raw),
			None => Ok(Self::default()),
		}
	}

	/// Checks that every id can be used in an `#id` selector and that the
	/// three field ids are distinct.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let ids = [
			("template_id", &self.template_id),
			("host_id", &self.host_id),
			("form_id", &self.form_id),
			("fields.title", &self.fields.title),
			("fields.description", &self.fields.description),
			("fields.people", &self.fields.people),
		];
		for (key, id) in ids {
			if !is_valid_element_id(id) {
				return Err(ConfigError::InvalidId {
					key,
					id: id.clone(),
				});
			}
		}

		let fields = [
			&self.fields.title,
			&self.fields.description,
			&self.fields.people,
		];
		for (index, id) in fields.iter().enumerate() {
			if fields[..index].contains(id) {
				return Err(ConfigError::DuplicateFieldId((*id).clone()));
			}
		}

		Ok(())
	}
}

// Letters, digits, '-' and '_', not starting with a digit or "--".
fn is_valid_element_id(id: &str) -> bool {
	let mut chars = id.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	if first.is_ascii_digit() || id.starts_with("--") {
		return false;
	}
	if first == '-' && id[1..].starts_with(|c: char| c.is_ascii_digit()) {
		return false;
	}
	id.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config_matches_stock_page() {
		// Act
		let config = FormConfig::default();

		// Assert
		assert_eq!(config.template_id, "project-input");
		assert_eq!(config.host_id, "app");
		assert_eq!(config.form_id, "user-input");
		assert_eq!(config.fields, FieldIds::default());
		assert_eq!(config.alert_message, "Invalid input, please try again");
		assert_eq!(config.branch_policy, BranchPolicy::Corrected);
		assert_eq!(config.constraint_mode, ConstraintMode::RequiredOnly);
		assert_eq!(config.min_length, 5);
		assert!(config.validate().is_ok());
	}

	#[rstest]
	fn test_from_toml_str_overrides() {
		// Arrange
		let source = r#"
			form_id = "new-project"
			constraint_mode = "enforced"
			min_length = 3

			[fields]
			title = "project-title"
		"#;

		// Act
		let config = FormConfig::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(config.form_id, "new-project");
		assert_eq!(config.constraint_mode, ConstraintMode::Enforced);
		assert_eq!(config.min_length, 3);
		assert_eq!(config.fields.title, "project-title");
		assert_eq!(config.fields.description, "description");
	}

	#[rstest]
	fn test_from_toml_str_rejects_unknown_keys() {
		let result = FormConfig::from_toml_str("colour = \"blue\"");
		assert!(matches!(result, Err(ConfigError::Toml(_))));
	}

	#[rstest]
	fn test_from_json_str_empty_object_is_default() {
		let config = FormConfig::from_json_str("{}").unwrap();
		assert_eq!(config, FormConfig::default());
	}

	#[rstest]
	fn test_from_json_str_rejects_bad_policy() {
		let result = FormConfig::from_json_str(r#"{"branch_policy": "sideways"}"#);
		assert!(matches!(result, Err(ConfigError::Json(_))));
	}

	#[rstest]
	fn test_from_data_config_absent_is_default() {
		assert_eq!(FormConfig::from_data_config(None).unwrap(), FormConfig::default());
	}

	#[rstest]
	fn test_from_data_config_reads_policy() {
		// Act
		let config = FormConfig::from_data_config(Some(r#"{"branch_policy":"inverted"}"#)).unwrap();

		// Assert
		assert_eq!(config.branch_policy, BranchPolicy::Inverted);
		assert_eq!(config.host_id, DEFAULT_HOST_ID);
	}

	#[rstest]
	#[case("{branch_policy: inverted}")]
	#[case("")]
	#[case(r#"{"form_id": ""}"#)]
	fn test_from_data_config_rejects_bad_attribute(#[case] raw: &str) {
		assert!(FormConfig::from_data_config(Some(raw)).is_err());
	}

	#[rstest]
	#[case("")]
	#[case("has space")]
	#[case("1st")]
	#[case("--custom")]
	#[case("-9")]
	#[case("a.b")]
	#[case("a#b")]
	fn test_validate_rejects_bad_ids(#[case] id: &str) {
		// Arrange
		let config = FormConfig {
			host_id: id.to_string(),
			..FormConfig::default()
		};

		// Act
		let result = config.validate();

		// Assert
		assert!(
			matches!(result, Err(ConfigError::InvalidId { key: "host_id", .. })),
			"id {id:?}"
		);
	}

	#[rstest]
	#[case("app")]
	#[case("user-input")]
	#[case("_private")]
	#[case("-dash")]
	#[case("field_2")]
	fn test_validate_accepts_ids(#[case] id: &str) {
		let config = FormConfig {
			host_id: id.to_string(),
			..FormConfig::default()
		};
		assert!(config.validate().is_ok(), "id {id:?}");
	}

	#[rstest]
	fn test_validate_rejects_duplicate_field_ids() {
		// Arrange
		let config = FormConfig {
			fields: FieldIds {
				title: "name".to_string(),
				description: "details".to_string(),
				people: "name".to_string(),
			},
			..FormConfig::default()
		};

		// Act
		let result = config.validate();

		// Assert
		assert!(matches!(result, Err(ConfigError::DuplicateFieldId(id)) if id == "name"));
	}
}
