//! Form controller
//!
//! [`FormController`] owns the three bound inputs and runs the
//! gather → validate → emit → clear cycle for each submit event.
//!
//! ```text
//!            submit(event)
//!   Idle ───────────────────▶ Submitting
//!    ▲                            │ prevent_default
//!    │                            │ gather_input ──▶ rules × 3
//!    │   emit + clear_inputs      │
//!    └────────── Ok ◀─────────────┤
//!    └────────── Err (alert) ◀────┘
//! ```

use crate::config::{BranchPolicy, FormConfig};
use crate::dom::{Dialog, InputField, SubmitEvent};
use crate::error::{FieldName, FieldViolation, InvalidInput};
use crate::sink::SubmissionSink;
use crate::{debug_log, warn_log};
use project_input_forms::{ParsedSubmission, ValidationRule, coerce_count};
use std::rc::Rc;

/// The three inputs a controller reads and clears.
#[derive(Debug, Clone)]
pub struct BoundFields<F> {
	pub title: F,
	pub description: F,
	pub people: F,
}

impl<F: InputField> BoundFields<F> {
	pub fn get(&self, name: FieldName) -> &F {
		match name {
			FieldName::Title => &self.title,
			FieldName::Description => &self.description,
			FieldName::People => &self.people,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
	Idle,
	Submitting,
}

/// Result of handling one submit event.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// The submission was emitted and the fields were cleared.
	Submitted(ParsedSubmission),
	/// The user was alerted and the fields were left untouched.
	Rejected(InvalidInput),
}

pub struct FormController<F: InputField> {
	fields: BoundFields<F>,
	dialog: Rc<dyn Dialog>,
	sink: Rc<dyn SubmissionSink>,
	config: FormConfig,
	state: ControllerState,
}

impl<F: InputField> FormController<F> {
	pub fn new(
		fields: BoundFields<F>,
		dialog: Rc<dyn Dialog>,
		sink: Rc<dyn SubmissionSink>,
		config: FormConfig,
	) -> Self {
		Self {
			fields,
			dialog,
			sink,
			config,
			state: ControllerState::Idle,
		}
	}

	pub fn fields(&self) -> &BoundFields<F> {
		&self.fields
	}

	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	pub fn state(&self) -> ControllerState {
		self.state
	}

	/// Reads the three fields and turns them into a submission.
	///
	/// Each value is checked against a required rule carrying the
	/// configured `min_length`, under the configured constraint mode. The
	/// branch policy then decides whether passing or failing validation
	/// is accepted. On rejection the alert is shown before returning.
	pub fn gather_input(&self) -> Result<ParsedSubmission, InvalidInput> {
		let title = self.fields.title.value();
		let description = self.fields.description.value();
		let people = self.fields.people.value();

		let violations: Vec<FieldViolation> = FieldName::ALL
			.into_iter()
			.zip([&title, &description, &people])
			.filter_map(|(field, value)| {
				let rule = ValidationRule::new(value.as_str())
					.required()
					.min_length(self.config.min_length);
				self.config
					.constraint_mode
					.evaluate(&rule)
					.err()
					.map(|violation| FieldViolation { field, violation })
			})
			.collect();
		debug_log!("Gathered input with {} violation(s)", violations.len());

		let accepted = match self.config.branch_policy {
			BranchPolicy::Corrected => violations.is_empty(),
			BranchPolicy::Inverted => !violations.is_empty(),
		};
		if !accepted {
			self.dialog.alert(&self.config.alert_message);
			return Err(if violations.is_empty() {
				InvalidInput::InvertedPolicy
			} else {
				InvalidInput::Fields(violations)
			});
		}

		match coerce_count(&people) {
			Ok(people) => Ok(ParsedSubmission::new(title, description, people)),
			Err(error) => {
				self.dialog.alert(&self.config.alert_message);
				Err(error.into())
			}
		}
	}

	/// Handles one submit event.
	///
	/// The native submission is always suppressed. Accepted input is
	/// emitted to the sink and the fields are cleared.
	pub fn submit(&mut self, event: &dyn SubmitEvent) -> SubmitOutcome {
		event.prevent_default();
		self.state = ControllerState::Submitting;

		let outcome = match self.gather_input() {
			Ok(submission) => {
				self.sink.emit(&submission);
				self.clear_inputs();
				SubmitOutcome::Submitted(submission)
			}
			Err(reason) => {
				warn_log!("Submission rejected: {}", reason);
				SubmitOutcome::Rejected(reason)
			}
		};

		self.state = ControllerState::Idle;
		outcome
	}

	pub fn clear_inputs(&self) {
		for name in FieldName::ALL {
			self.fields.get(name).set_value("");
		}
	}
}
