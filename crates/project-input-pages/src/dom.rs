//! DOM seam
//!
//! The controller never touches `web_sys` directly. It reads and writes
//! fields through [`InputField`], raises alerts through [`Dialog`] and
//! receives events as [`SubmitEvent`]. Mounting goes through [`DomHost`],
//! which hides how templates are found, cloned and inserted.
//!
//! Two hosts exist:
//!
//! - [`web::WebHost`] drives the real document (WASM only)
//! - [`memory::MemoryDocument`] is an in-memory stand-in used by tests
//!   (enabled for `cfg(test)` and by the `testing` feature)

use crate::error::MountResult;
use std::rc::Rc;

#[cfg(any(test, feature = "testing"))]
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// A live input element whose current value is read and written directly.
pub trait InputField {
	fn value(&self) -> String;
	fn set_value(&self, value: &str);
}

/// A blocking user-facing message box.
pub trait Dialog {
	fn alert(&self, message: &str);
}

/// The part of a submit event the controller needs.
pub trait SubmitEvent {
	/// Stops the browser from performing the native form submission.
	fn prevent_default(&self);
}

/// Callback registered for a form's `submit` event.
///
/// A handler may be re-entered when an event is dispatched from inside
/// it, so it takes `&self` and guards its own state.
pub type SubmitHandler = Box<dyn Fn(&dyn SubmitEvent)>;

/// A document the form can be mounted into.
///
/// Every lookup returns a [`MountError`](crate::error::MountError) when the
/// element is missing or of the wrong kind.
pub trait DomHost {
	/// An inert markup fragment
	type Template;
	/// A live container receiving the form
	type Region;
	/// The cloned form element
	type Form;
	type Field: InputField + 'static;
	/// Keeps a submit handler registered until dropped
	type Listener;

	fn template(&self, id: &str) -> MountResult<Self::Template>;

	fn region(&self, id: &str) -> MountResult<Self::Region>;

	/// Deep-clones the template content and returns its first element.
	fn import_form(&self, template: &Self::Template, template_id: &str)
	-> MountResult<Self::Form>;

	fn set_form_id(&self, form: &Self::Form, id: &str);

	/// Finds an input by id among the form's descendants.
	fn field(&self, form: &Self::Form, id: &str) -> MountResult<Self::Field>;

	fn listen_submit(&self, form: &Self::Form, handler: SubmitHandler)
	-> MountResult<Self::Listener>;

	/// Inserts the form as the first child of the region.
	fn insert_first(&self, region: &Self::Region, form: &Self::Form) -> MountResult<()>;

	fn dialog(&self) -> Rc<dyn Dialog>;
}
