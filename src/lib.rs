//! # project-input
//!
//! A browser form for entering a new project, compiled to WebAssembly.
//!
//! On page load the form is cloned from the `#project-input` template,
//! given the id `user-input` and inserted at the top of `#app`. Submitting
//! it validates the title, description and people fields, writes the
//! accepted values to the console and clears the inputs. Rejected input
//! raises a blocking alert.
//!
//! ## Crates
//!
//! - [`forms`]: validation rules, evaluators and value coercion
//! - [`pages`]: the form controller, the DOM seam and mounting
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - readable panic messages in the browser console
//! - `debug-hooks` - enables `debug_log!` output in debug builds
//! - `full` - everything above
//!
//! ## Host page
//!
//! ```html
//! <template id="project-input">
//!   <form>
//!     <input type="text" id="title" />
//!     <input type="text" id="description" />
//!     <input type="number" id="people" />
//!     <button type="submit">ADD PROJECT</button>
//!   </form>
//! </template>
//! <div id="app" data-config='{"branch_policy": "corrected"}'></div>
//! ```
//!
//! See `www/index.html` for the complete page.

pub use project_input_forms as forms;
pub use project_input_pages as pages;

pub mod prelude {
	pub use project_input_forms::{
		ConstraintMode, ParsedSubmission, RuleValue, ValidationRule, check, validate,
	};
	pub use project_input_pages::{
		BranchPolicy, ConsoleSink, FormConfig, FormController, MountError, MountedForm,
		SubmissionSink, SubmitOutcome, mount,
	};
}

#[cfg(target_arch = "wasm32")]
mod entry {
	use project_input_pages::{ConsoleSink, mount_document};
	use std::rc::Rc;
	use wasm_bindgen::prelude::*;

	/// Mounts the form when the module is instantiated.
	///
	/// The submit handler is leaked so it stays registered until the page
	/// unloads. A mount failure is returned to JavaScript as an `Error`.
	#[wasm_bindgen(start)]
	pub fn start() -> Result<(), JsValue> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let mounted = mount_document(Rc::new(ConsoleSink))?;
		mounted.leak();
		Ok(())
	}
}
