//! In-memory document for exercising the form without a browser
//!
//! [`MemoryDocument`] holds named templates and regions. Mounting clones a
//! [`MemoryTemplate`] into a [`MemoryForm`] whose inputs are plain shared
//! strings, and [`MemoryForm::dispatch_submit`] plays the role of the
//! browser delivering a `submit` event.
//!
//! ## Example
//!
//! ```ignore
//! use project_input_pages::config::FormConfig;
//! use project_input_pages::dom::InputField;
//! use project_input_pages::dom::memory::{MemoryDocument, MemoryTemplate, RecordingSink};
//! use project_input_pages::mount::mount;
//! use std::rc::Rc;
//!
//! let document = MemoryDocument::new()
//!     .with_template("project-input", MemoryTemplate::project_form())
//!     .with_region("app");
//! let sink = Rc::new(RecordingSink::default());
//!
//! let mounted = mount(&document, FormConfig::default(), sink.clone()).unwrap();
//! let form = mounted.form();
//! form.input("title").unwrap().set_value("Build App");
//! form.input("description").unwrap().set_value("A test project");
//! form.input("people").unwrap().set_value("3");
//!
//! let event = form.dispatch_submit();
//! assert!(event.default_prevented());
//! assert_eq!(sink.submissions().len(), 1);
//! ```

use super::{Dialog, DomHost, InputField, SubmitEvent, SubmitHandler};
use crate::error::{MountError, MountResult};
use crate::sink::SubmissionSink;
use project_input_forms::ParsedSubmission;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// A text input backed by a shared string.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
	value: Rc<RefCell<String>>,
}

impl InputField for MemoryInput {
	fn value(&self) -> String {
		self.value.borrow().clone()
	}

	fn set_value(&self, value: &str) {
		*self.value.borrow_mut() = value.to_string();
	}
}

/// A submit event that records whether its default action was prevented.
#[derive(Debug, Default)]
pub struct MemoryEvent {
	default_prevented: Cell<bool>,
}

impl MemoryEvent {
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl SubmitEvent for MemoryEvent {
	fn prevent_default(&self) {
		self.default_prevented.set(true);
	}
}

/// Records alert messages instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingDialog {
	messages: RefCell<Vec<String>>,
}

impl RecordingDialog {
	pub fn messages(&self) -> Vec<String> {
		self.messages.borrow().clone()
	}
}

impl Dialog for RecordingDialog {
	fn alert(&self, message: &str) {
		self.messages.borrow_mut().push(message.to_string());
	}
}

/// Collects emitted submissions.
#[derive(Debug, Default)]
pub struct RecordingSink {
	submissions: RefCell<Vec<ParsedSubmission>>,
}

impl RecordingSink {
	pub fn submissions(&self) -> Vec<ParsedSubmission> {
		self.submissions.borrow().clone()
	}
}

impl SubmissionSink for RecordingSink {
	fn emit(&self, submission: &ParsedSubmission) {
		self.submissions.borrow_mut().push(submission.clone());
	}
}

/// Markup of a template: an optional root element and its descendants.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplate {
	root_tag: Option<String>,
	// id -> tag name
	descendants: Vec<(String, String)>,
}

impl MemoryTemplate {
	/// A template with no element content.
	pub fn empty() -> Self {
		Self::default()
	}

	/// A template whose first element has the given tag.
	pub fn with_root(tag: impl Into<String>) -> Self {
		Self {
			root_tag: Some(tag.into()),
			descendants: Vec::new(),
		}
	}

	/// The stock form: `<form>` with `#title`, `#description` and `#people` inputs.
	pub fn project_form() -> Self {
		Self::with_root("form")
			.with_input("title")
			.with_input("description")
			.with_input("people")
	}

	pub fn with_input(self, id: impl Into<String>) -> Self {
		self.with_element(id, "input")
	}

	pub fn with_element(mut self, id: impl Into<String>, tag: impl Into<String>) -> Self {
		self.descendants.push((id.into(), tag.into()));
		self
	}
}

struct FormNode {
	tag: String,
	id: RefCell<Option<String>>,
	inputs: HashMap<String, MemoryInput>,
	other_elements: HashMap<String, String>,
	handlers: RefCell<Vec<(u64, Rc<dyn Fn(&dyn SubmitEvent)>)>>,
	next_handler: Cell<u64>,
}

/// A form element cloned from a [`MemoryTemplate`]. Clones share the node.
#[derive(Clone)]
pub struct MemoryForm {
	node: Rc<FormNode>,
}

impl MemoryForm {
	fn from_template(template: &MemoryTemplate, tag: &str) -> Self {
		let mut inputs = HashMap::new();
		let mut other_elements = HashMap::new();
		for (id, element_tag) in &template.descendants {
			if element_tag == "input" {
				inputs.insert(id.clone(), MemoryInput::default());
			} else {
				other_elements.insert(id.clone(), element_tag.clone());
			}
		}
		Self {
			node: Rc::new(FormNode {
				tag: tag.to_string(),
				id: RefCell::new(None),
				inputs,
				other_elements,
				handlers: RefCell::new(Vec::new()),
				next_handler: Cell::new(0),
			}),
		}
	}

	pub fn id(&self) -> Option<String> {
		self.node.id.borrow().clone()
	}

	pub fn tag(&self) -> &str {
		&self.node.tag
	}

	pub fn input(&self, id: &str) -> Option<MemoryInput> {
		self.node.inputs.get(id).cloned()
	}

	pub fn listener_count(&self) -> usize {
		self.node.handlers.borrow().len()
	}

	/// Delivers a `submit` event to every registered handler.
	///
	/// Handlers run outside the registry borrow, so a handler may dispatch
	/// again on the same form the way a nested `dispatchEvent` would.
	pub fn dispatch_submit(&self) -> MemoryEvent {
		let event = MemoryEvent::default();
		let handlers: Vec<Rc<dyn Fn(&dyn SubmitEvent)>> = self
			.node
			.handlers
			.borrow()
			.iter()
			.map(|(_, handler)| Rc::clone(handler))
			.collect();
		for handler in handlers {
			handler(&event);
		}
		event
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

/// Unregisters its submit handler when dropped.
pub struct MemoryListener {
	node: Weak<FormNode>,
	handler_id: u64,
}

impl Drop for MemoryListener {
	fn drop(&mut self) {
		if let Some(node) = self.node.upgrade() {
			node.handlers
				.borrow_mut()
				.retain(|(id, _)| *id != self.handler_id);
		}
	}
}

/// A live container holding inserted forms in document order.
#[derive(Clone, Default)]
pub struct MemoryRegion {
	children: Rc<RefCell<Vec<MemoryForm>>>,
}

impl MemoryRegion {
	pub fn children(&self) -> Vec<MemoryForm> {
		self.children.borrow().clone()
	}

	pub fn first_child(&self) -> Option<MemoryForm> {
		self.children.borrow().first().cloned()
	}
}

/// A document made of named templates and regions.
#[derive(Default)]
pub struct MemoryDocument {
	templates: HashMap<String, MemoryTemplate>,
	regions: HashMap<String, MemoryRegion>,
	dialog: Rc<RecordingDialog>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_template(mut self, id: impl Into<String>, template: MemoryTemplate) -> Self {
		self.templates.insert(id.into(), template);
		self
	}

	pub fn with_region(mut self, id: impl Into<String>) -> Self {
		self.regions.insert(id.into(), MemoryRegion::default());
		self
	}

	pub fn region_by_id(&self, id: &str) -> Option<MemoryRegion> {
		self.regions.get(id).cloned()
	}

	/// Messages passed to `alert` so far.
	pub fn alerts(&self) -> Vec<String> {
		self.dialog.messages()
	}
}

impl DomHost for MemoryDocument {
	type Template = MemoryTemplate;
	type Region = MemoryRegion;
	type Form = MemoryForm;
	type Field = MemoryInput;
	type Listener = MemoryListener;

	fn template(&self, id: &str) -> MountResult<MemoryTemplate> {
		self.templates
			.get(id)
			.cloned()
			.ok_or_else(|| MountError::TemplateNotFound(id.to_string()))
	}

	fn region(&self, id: &str) -> MountResult<MemoryRegion> {
		self.region_by_id(id)
			.ok_or_else(|| MountError::HostNotFound(id.to_string()))
	}

	fn import_form(&self, template: &MemoryTemplate, template_id: &str) -> MountResult<MemoryForm> {
		let tag = template
			.root_tag
			.as_deref()
			.ok_or_else(|| MountError::EmptyTemplate(template_id.to_string()))?;
		if tag != "form" {
			return Err(MountError::WrongElementType {
				id: template_id.to_string(),
				expected: "form",
			});
		}
		Ok(MemoryForm::from_template(template, tag))
	}

	fn set_form_id(&self, form: &MemoryForm, id: &str) {
		*form.node.id.borrow_mut() = Some(id.to_string());
	}

	fn field(&self, form: &MemoryForm, id: &str) -> MountResult<MemoryInput> {
		if let Some(input) = form.input(id) {
			return Ok(input);
		}
		if form.node.other_elements.contains_key(id) {
			return Err(MountError::WrongElementType {
				id: id.to_string(),
				expected: "input",
			});
		}
		Err(MountError::FieldNotFound(id.to_string()))
	}

	fn listen_submit(&self, form: &MemoryForm, handler: SubmitHandler) -> MountResult<MemoryListener> {
		let handler_id = form.node.next_handler.get();
		form.node.next_handler.set(handler_id + 1);
		form.node.handlers.borrow_mut().push((handler_id, Rc::from(handler)));
		Ok(MemoryListener {
			node: Rc::downgrade(&form.node),
			handler_id,
		})
	}

	fn insert_first(&self, region: &MemoryRegion, form: &MemoryForm) -> MountResult<()> {
		region.children.borrow_mut().insert(0, form.clone());
		Ok(())
	}

	fn dialog(&self) -> Rc<dyn Dialog> {
		self.dialog.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_import_form_creates_independent_inputs() {
		// Arrange
		let document = MemoryDocument::new().with_template("t", MemoryTemplate::project_form());
		let template = document.template("t").unwrap();

		// Act
		let first = document.import_form(&template, "t").unwrap();
		let second = document.import_form(&template, "t").unwrap();
		first.input("title").unwrap().set_value("one");

		// Assert
		assert_eq!(first.input("title").unwrap().value(), "one");
		assert_eq!(second.input("title").unwrap().value(), "");
		assert!(!first.ptr_eq(&second));
	}

	#[rstest]
	fn test_dropping_listener_unregisters_handler() {
		// Arrange
		let document = MemoryDocument::new().with_template("t", MemoryTemplate::project_form());
		let form = document
			.import_form(&document.template("t").unwrap(), "t")
			.unwrap();
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let listener = document
			.listen_submit(&form, Box::new(move |_: &dyn SubmitEvent| counter.set(counter.get() + 1)))
			.unwrap();

		// Act
		form.dispatch_submit();
		drop(listener);
		form.dispatch_submit();

		// Assert
		assert_eq!(calls.get(), 1);
		assert_eq!(form.listener_count(), 0);
	}

	#[rstest]
	fn test_handler_can_dispatch_again() {
		// Arrange
		let document = MemoryDocument::new().with_template("t", MemoryTemplate::project_form());
		let form = document
			.import_form(&document.template("t").unwrap(), "t")
			.unwrap();
		let depth = Rc::new(Cell::new(0));
		let calls = Rc::new(Cell::new(0));
		let (inner_form, inner_depth, inner_calls) = (form.clone(), depth.clone(), calls.clone());
		let _listener = document
			.listen_submit(
				&form,
				Box::new(move |_: &dyn SubmitEvent| {
					inner_calls.set(inner_calls.get() + 1);
					if inner_depth.get() == 0 {
						inner_depth.set(1);
						inner_form.dispatch_submit();
					}
				}),
			)
			.unwrap();

		// Act
		form.dispatch_submit();

		// Assert
		assert_eq!(calls.get(), 2);
		assert_eq!(form.listener_count(), 1);
	}

	#[rstest]
	fn test_insert_first_prepends() {
		// Arrange
		let document = MemoryDocument::new()
			.with_template("t", MemoryTemplate::project_form())
			.with_region("app");
		let template = document.template("t").unwrap();
		let region = document.region("app").unwrap();
		let older = document.import_form(&template, "t").unwrap();
		let newer = document.import_form(&template, "t").unwrap();

		// Act
		document.insert_first(&region, &older).unwrap();
		document.insert_first(&region, &newer).unwrap();

		// Assert
		let children = region.children();
		assert_eq!(children.len(), 2);
		assert!(children[0].ptr_eq(&newer));
		assert!(children[1].ptr_eq(&older));
	}
}
