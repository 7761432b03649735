//! Error types for mounting the form and gathering its input

use crate::config::ConfigError;
use project_input_forms::{CoercionError, RuleViolation};
use std::fmt;

/// Startup faults. Any of these aborts mounting before the form is inserted.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
	#[error("Template '#{0}' not found")]
	TemplateNotFound(String),
	#[error("Host element '#{0}' not found")]
	HostNotFound(String),
	#[error("Template '#{0}' has no element content")]
	EmptyTemplate(String),
	#[error("Field '#{0}' not found in form")]
	FieldNotFound(String),
	#[error("Element '#{id}' is not a <{expected}> element")]
	WrongElementType { id: String, expected: &'static str },
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),
	#[error("No browser window available")]
	NoWindow,
	#[error("DOM operation failed: {0}")]
	Js(String),
}

pub type MountResult<T> = std::result::Result<T, MountError>;

/// One of the three bound fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
	Title,
	Description,
	People,
}

impl FieldName {
	pub const ALL: [FieldName; 3] = [Self::Title, Self::Description, Self::People];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Title => "title",
			Self::Description => "description",
			Self::People => "people",
		}
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A rule violation attributed to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
	pub field: FieldName,
	pub violation: RuleViolation,
}

impl fmt::Display for FieldViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.field, self.violation)
	}
}

/// Why gathered input was not turned into a submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
	#[error("Invalid fields: {}", join_violations(.0))]
	Fields(Vec<FieldViolation>),
	#[error("Invalid people count: {0}")]
	People(#[from] CoercionError),
	#[error("All fields passed validation and the inverted branch policy rejects it")]
	InvertedPolicy,
}

fn join_violations(violations: &[FieldViolation]) -> String {
	violations
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
	fn from(error: MountError) -> Self {
		js_sys::Error::new(&error.to_string()).into()
	}
}
