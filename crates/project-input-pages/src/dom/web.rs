//! Browser document host built on `web-sys`

use super::{Dialog, DomHost, InputField, SubmitEvent, SubmitHandler};
use crate::config::FormConfig;
use crate::error::{MountError, MountResult};
use crate::error_log;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
	Document, DocumentFragment, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement,
	HtmlTemplateElement, Window,
};

impl InputField for HtmlInputElement {
	fn value(&self) -> String {
		HtmlInputElement::value(self)
	}

	fn set_value(&self, value: &str) {
		HtmlInputElement::set_value(self, value);
	}
}

impl SubmitEvent for Event {
	fn prevent_default(&self) {
		Event::prevent_default(self);
	}
}

/// `window.alert`.
pub struct WindowDialog {
	window: Window,
}

impl Dialog for WindowDialog {
	fn alert(&self, message: &str) {
		if let Err(err) = self.window.alert_with_message(message) {
			error_log!("alert() failed: {:?}", err);
		}
	}
}

/// A `submit` listener registered on a form element.
///
/// Dropping it removes the listener before the closure is freed.
pub struct WebListener {
	target: EventTarget,
	closure: Closure<dyn Fn(Event)>,
}

impl Drop for WebListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback("submit", self.closure.as_ref().unchecked_ref());
	}
}

/// The page's `window.document`.
pub struct WebHost {
	window: Window,
	document: Document,
}

impl WebHost {
	pub fn new(window: Window) -> MountResult<Self> {
		let document = window
			.document()
			.ok_or_else(|| MountError::Js("window has no document".to_string()))?;
		Ok(Self { window, document })
	}

	pub fn from_window() -> MountResult<Self> {
		Self::new(web_sys::window().ok_or(MountError::NoWindow)?)
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Reads a JSON [`FormConfig`] from the `data-config` attribute of the
	/// element with the given id. Missing attribute means defaults.
	pub fn config_from_region(&self, id: &str) -> MountResult<FormConfig> {
		let region = self.region(id)?;
		let attribute = region.get_attribute("data-config");
		Ok(FormConfig::from_data_config(attribute.as_deref())?)
	}

	fn element_by_id(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}
}

impl DomHost for WebHost {
	type Template = HtmlTemplateElement;
	type Region = Element;
	type Form = HtmlFormElement;
	type Field = HtmlInputElement;
	type Listener = WebListener;

	fn template(&self, id: &str) -> MountResult<HtmlTemplateElement> {
		self.element_by_id(id)
			.ok_or_else(|| MountError::TemplateNotFound(id.to_string()))?
			.dyn_into::<HtmlTemplateElement>()
			.map_err(|_| MountError::WrongElementType {
				id: id.to_string(),
				expected: "template",
			})
	}

	fn region(&self, id: &str) -> MountResult<Element> {
		self.element_by_id(id)
			.ok_or_else(|| MountError::HostNotFound(id.to_string()))
	}

	fn import_form(
		&self,
		template: &HtmlTemplateElement,
		template_id: &str,
	) -> MountResult<HtmlFormElement> {
		let fragment = self
			.document
			.import_node_with_deep(&template.content(), true)?
			.dyn_into::<DocumentFragment>()
			.map_err(|_| MountError::Js("imported template content is not a fragment".to_string()))?;
		fragment
			.first_element_child()
			.ok_or_else(|| MountError::EmptyTemplate(template_id.to_string()))?
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| MountError::WrongElementType {
				id: template_id.to_string(),
				expected: "form",
			})
	}

	fn set_form_id(&self, form: &HtmlFormElement, id: &str) {
		form.set_id(id);
	}

	fn field(&self, form: &HtmlFormElement, id: &str) -> MountResult<HtmlInputElement> {
		form.query_selector(&format!("#{id}"))?
			.ok_or_else(|| MountError::FieldNotFound(id.to_string()))?
			.dyn_into::<HtmlInputElement>()
			.map_err(|_| MountError::WrongElementType {
				id: id.to_string(),
				expected: "input",
			})
	}

	fn listen_submit(
		&self,
		form: &HtmlFormElement,
		handler: SubmitHandler,
	) -> MountResult<WebListener> {
		let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| handler(&event));
		form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
		Ok(WebListener {
			target: form.clone().into(),
			closure,
		})
	}

	fn insert_first(&self, region: &Element, form: &HtmlFormElement) -> MountResult<()> {
		region.insert_adjacent_element("afterbegin", form)?;
		Ok(())
	}

	fn dialog(&self) -> Rc<dyn Dialog> {
		Rc::new(WindowDialog {
			window: self.window.clone(),
		})
	}
}
