//! The value produced by a successful form submission

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title, description and head count of a submitted project.
///
/// Displays as the three values separated by single spaces, matching
/// what the console shows when the triple is logged.
///
/// # Examples
///
/// ```
/// use project_input_forms::ParsedSubmission;
///
/// let submission = ParsedSubmission::new("Build App", "A test project", 3);
/// assert_eq!(submission.to_string(), "Build App A test project 3");
/// let (title, _, people) = submission.into_parts();
/// assert_eq!((title.as_str(), people), ("Build App", 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSubmission {
	pub title: String,
	pub description: String,
	pub people: u32,
}

impl ParsedSubmission {
	pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			people,
		}
	}

	/// Splits the submission into its ordered triple.
	pub fn into_parts(self) -> (String, String, u32) {
		(self.title, self.description, self.people)
	}
}

impl fmt::Display for ParsedSubmission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.title, self.description, self.people)
	}
}
