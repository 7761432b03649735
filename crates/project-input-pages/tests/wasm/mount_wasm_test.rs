//! Browser tests for mounting the project input form
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/project-input-pages

#![cfg(target_arch = "wasm32")]

use project_input_pages::dom::web::WebHost;
use project_input_pages::{
	BranchPolicy, FormConfig, MountError, ParsedSubmission, SubmissionSink, mount,
	mount_document,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<template id="project-input">
	<form>
		<input type="text" id="title" />
		<textarea id="notes"></textarea>
		<input type="text" id="description" />
		<input type="number" id="people" />
		<button type="submit">ADD PROJECT</button>
	</form>
</template>
<div id="app"><p id="existing">existing</p></div>
"#;

fn page_with_config(config: &str) -> String {
	PAGE.replace(
		r#"<div id="app">"#,
		&format!(r#"<div id="app" data-config='{config}'>"#),
	)
}

#[derive(Default)]
struct CollectingSink(RefCell<Vec<ParsedSubmission>>);

impl SubmissionSink for CollectingSink {
	fn emit(&self, submission: &ParsedSubmission) {
		self.0.borrow_mut().push(submission.clone());
	}
}

fn install_page(markup: &str) -> WebHost {
	let host = WebHost::from_window().unwrap();
	let container = host.document().create_element("div").unwrap();
	container.set_inner_html(markup);
	host.document().body().unwrap().set_inner_html("");
	host.document()
		.body()
		.unwrap()
		.append_child(&container)
		.unwrap();
	host
}

fn input(host: &WebHost, id: &str) -> HtmlInputElement {
	host.document()
		.query_selector(&format!("#user-input #{id}"))
		.unwrap()
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap()
}

fn submit_event() -> Event {
	let init = EventInit::new();
	init.set_cancelable(true);
	Event::new_with_event_init_dict("submit", &init).unwrap()
}

#[wasm_bindgen_test]
fn test_mount_inserts_form_before_existing_children() {
	// Arrange
	let host = install_page(PAGE);

	// Act
	let mounted = mount(&host, FormConfig::default(), Rc::new(CollectingSink::default())).unwrap();

	// Assert
	let app: Element = host.document().get_element_by_id("app").unwrap();
	let first = app.first_element_child().unwrap();
	assert_eq!(first.id(), "user-input");
	assert_eq!(first.tag_name(), "FORM");
	assert_eq!(
		app.last_element_child().unwrap().id(),
		"existing"
	);
	drop(mounted);
}

#[wasm_bindgen_test]
fn test_submit_event_is_prevented_and_logged() {
	// Arrange
	let host = install_page(PAGE);
	let sink = Rc::new(CollectingSink::default());
	let mounted = mount(&host, FormConfig::default(), sink.clone()).unwrap();
	input(&host, "title").set_value("Build App");
	input(&host, "description").set_value("A test project");
	input(&host, "people").set_value("3");
	let form: &HtmlFormElement = mounted.form();
	let event = submit_event();

	// Act
	form.dispatch_event(&event).unwrap();

	// Assert
	assert!(event.default_prevented());
	assert_eq!(
		sink.0.borrow().clone(),
		vec![ParsedSubmission::new("Build App", "A test project", 3)]
	);
	assert_eq!(input(&host, "title").value(), "");
	assert_eq!(input(&host, "people").value(), "");
}

#[wasm_bindgen_test]
fn test_missing_template_is_reported() {
	// Arrange
	let host = install_page(r#"<div id="app"></div>"#);

	// Act
	let result = mount(&host, FormConfig::default(), Rc::new(CollectingSink::default()));

	// Assert
	assert!(matches!(result, Err(MountError::TemplateNotFound(_))));
}

#[wasm_bindgen_test]
fn test_non_input_field_is_reported() {
	// Arrange
	let host = install_page(PAGE);
	let mut config = FormConfig::default();
	config.fields.people = "notes".to_string();

	// Act
	let result = mount(&host, config, Rc::new(CollectingSink::default()));

	// Assert
	assert!(matches!(
		result,
		Err(MountError::WrongElementType { expected: "input", .. })
	));
	let app = host.document().get_element_by_id("app").unwrap();
	assert_eq!(app.first_element_child().unwrap().id(), "existing");
}

#[wasm_bindgen_test]
fn test_mount_document_reads_data_config() {
	// Arrange
	let host = install_page(&page_with_config(r#"{"branch_policy":"inverted"}"#));

	// Act
	let mounted = mount_document(Rc::new(CollectingSink::default())).unwrap();

	// Assert
	assert_eq!(
		mounted.controller().borrow().config().branch_policy,
		BranchPolicy::Inverted
	);
	let app = host.document().get_element_by_id("app").unwrap();
	assert_eq!(app.first_element_child().unwrap().id(), "user-input");
}

#[wasm_bindgen_test]
fn test_mount_document_rejects_malformed_data_config() {
	// Arrange
	let host = install_page(&page_with_config("{branch_policy: inverted"));

	// Act
	let result = mount_document(Rc::new(CollectingSink::default()));

	// Assert
	assert!(matches!(result, Err(MountError::Config(_))));
	let app = host.document().get_element_by_id("app").unwrap();
	assert_eq!(app.first_element_child().unwrap().id(), "existing");
}

#[wasm_bindgen_test]
fn test_missing_data_config_uses_defaults() {
	// Arrange
	let host = install_page(PAGE);

	// Act
	let config = host.config_from_region("app").unwrap();

	// Assert
	assert_eq!(config, FormConfig::default());
}
