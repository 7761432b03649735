//! Output of accepted submissions

use project_input_forms::ParsedSubmission;

/// Receives every accepted submission.
pub trait SubmissionSink {
	fn emit(&self, submission: &ParsedSubmission);
}

/// Writes submissions to the console.
///
/// On WASM this is `console.log(title, description, people)`. Natively
/// the triple is recorded as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
	#[cfg(target_arch = "wasm32")]
	fn emit(&self, submission: &ParsedSubmission) {
		use wasm_bindgen::JsValue;

		web_sys::console::log_3(
			&JsValue::from_str(&submission.title),
			&JsValue::from_str(&submission.description),
			&JsValue::from_f64(f64::from(submission.people)),
		);
	}

	#[cfg(not(target_arch = "wasm32"))]
	fn emit(&self, submission: &ParsedSubmission) {
		tracing::info!(
			title = %submission.title,
			description = %submission.description,
			people = submission.people,
			"{submission}"
		);
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_console_sink_emits_without_subscriber() {
		ConsoleSink.emit(&ParsedSubmission::new("Build App", "A test project", 3));
	}
}
