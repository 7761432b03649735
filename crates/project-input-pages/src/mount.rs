//! Mounting the form into a host document
//!
//! [`mount`] performs the whole startup sequence against any [`DomHost`]:
//!
//! 1. look up the template and the host region
//! 2. clone the template's first element and give it the form id
//! 3. bind the three input fields
//! 4. register the submit handler
//! 5. insert the form as the first child of the host region
//!
//! Any lookup failure aborts before step 5, so a failed mount never leaves
//! a half-wired form in the page.

use crate::config::FormConfig;
use crate::controller::{BoundFields, FormController};
use crate::dom::{DomHost, SubmitEvent};
use crate::error::MountResult;
use crate::sink::SubmissionSink;
use crate::{error_log, info_log};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller shared between the mounted handle and the submit handler.
pub type SharedController<F> = Rc<RefCell<FormController<F>>>;

/// A form inserted into the document.
///
/// The submit handler stays registered while this handle is alive.
/// Call [`MountedForm::leak`] to keep it registered for the lifetime of
/// the page.
pub struct MountedForm<H: DomHost> {
	controller: SharedController<H::Field>,
	form: H::Form,
	listener: H::Listener,
}

impl<H: DomHost> MountedForm<H> {
	pub fn controller(&self) -> &SharedController<H::Field> {
		&self.controller
	}

	pub fn form(&self) -> &H::Form {
		&self.form
	}

	/// Gives up ownership of the submit handler so it is never unregistered.
	pub fn leak(self) -> SharedController<H::Field> {
		std::mem::forget(self.listener);
		self.controller
	}
}

/// Mounts the form described by `config` into `host`.
pub fn mount<H: DomHost>(
	host: &H,
	config: FormConfig,
	sink: Rc<dyn SubmissionSink>,
) -> MountResult<MountedForm<H>> {
	config.validate()?;

	let template = host.template(&config.template_id)?;
	let region = host.region(&config.host_id)?;

	let form = host.import_form(&template, &config.template_id)?;
	host.set_form_id(&form, &config.form_id);

	let fields = BoundFields {
		title: host.field(&form, &config.fields.title)?,
		description: host.field(&form, &config.fields.description)?,
		people: host.field(&form, &config.fields.people)?,
	};

	let host_id = config.host_id.clone();
	let controller = Rc::new(RefCell::new(FormController::new(
		fields,
		host.dialog(),
		sink,
		config,
	)));

	let handler_controller = Rc::clone(&controller);
	let listener = host.listen_submit(
		&form,
		Box::new(move |event: &dyn SubmitEvent| {
			match handler_controller.try_borrow_mut() {
				Ok(mut controller) => {
					controller.submit(event);
				}
				Err(_) => {
					event.prevent_default();
					error_log!("Submit handler re-entered while a submission is in progress");
				}
			}
		}),
	)?;

	host.insert_first(&region, &form)?;
	info_log!("Project input form mounted into #{}", host_id);

	Ok(MountedForm {
		controller,
		form,
		listener,
	})
}

/// Mounts the form into the browser document.
///
/// The configuration is read as JSON from the `data-config` attribute of
/// the default host element (`#app`); without it the defaults are used.
#[cfg(target_arch = "wasm32")]
pub fn mount_document(
	sink: Rc<dyn SubmissionSink>,
) -> MountResult<MountedForm<crate::dom::web::WebHost>> {
	let host = crate::dom::web::WebHost::from_window()?;
	let config = host.config_from_region(crate::config::DEFAULT_HOST_ID)?;
	mount(&host, config, sink)
}
