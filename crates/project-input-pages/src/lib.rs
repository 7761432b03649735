//! Project input form for the browser
//!
//! Renders the project input form from a `<template>`, validates the
//! three fields on submit and writes the accepted values to the console.
//!
//! ## Architecture
//!
//! - [`config`]: element ids, alert text and validation policy
//! - [`dom`]: the DOM seam ([`DomHost`], [`InputField`], [`Dialog`],
//!   [`SubmitEvent`]) with a `web-sys` host and an in-memory host
//! - [`controller`]: [`FormController`], the gather/submit/clear lifecycle
//! - [`mount`](mod@mount): wiring a controller into a document
//! - [`sink`]: where accepted submissions go
//! - [`logging`]: development logging macros (`console.*` on WASM, `tracing` natively)
//!
//! ## Example
//!
//! ```ignore
//! use project_input_pages::{ConsoleSink, mount_document};
//! use std::rc::Rc;
//!
//! // In a wasm32 entry point
//! let mounted = mount_document(Rc::new(ConsoleSink))?;
//! mounted.leak();
//! ```
//!
//! ## Feature Flags
//!
//! - `testing`: exposes [`dom::memory`] outside this crate's unit tests
//! - `debug-hooks`: enables [`debug_log!`] in debug builds

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod logging;
pub mod mount;
pub mod sink;

pub use config::{BranchPolicy, ConfigError, FieldIds, FormConfig};
pub use controller::{BoundFields, ControllerState, FormController, SubmitOutcome};
pub use dom::{Dialog, DomHost, InputField, SubmitEvent, SubmitHandler};
pub use error::{FieldName, FieldViolation, InvalidInput, MountError, MountResult};
pub use mount::{MountedForm, SharedController, mount};
pub use project_input_forms::{ConstraintMode, ParsedSubmission};
pub use sink::{ConsoleSink, SubmissionSink};

#[cfg(target_arch = "wasm32")]
pub use dom::web::WebHost;
#[cfg(target_arch = "wasm32")]
pub use mount::mount_document;

#[doc(hidden)]
pub mod __macro_support {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
