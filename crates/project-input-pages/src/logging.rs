//! Development diagnostics
//!
//! `debug_log!`, `info_log!`, `warn_log!` and `error_log!` report what the
//! form is doing while it is developed. They are compiled in only with
//! `debug_assertions`; `debug_log!` additionally needs the `debug-hooks`
//! feature. Disabled macros still type-check their format arguments.
//!
//! | Target | Sink |
//! |--------|------|
//! | `wasm32` | `console.debug` / `info` / `warn` / `error` |
//! | native | `tracing` events with target `project_input_pages` |
//!
//! Accepted submissions do not go through here. They are functional
//! output and use a [`SubmissionSink`](crate::sink::SubmissionSink) in
//! every build.
//!
//! ```ignore
//! use project_input_pages::{info_log, warn_log};
//!
//! info_log!("Project input form mounted into #{}", host_id);
//! warn_log!("Submission rejected: {}", reason);
//! ```

#[doc(hidden)]
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! __form_log {
	(debug, $($arg:tt)*) => {
		$crate::__macro_support::web_sys::console::debug_1(&::std::format!($($arg)*).into())
	};
	(info, $($arg:tt)*) => {
		$crate::__macro_support::web_sys::console::info_1(&::std::format!($($arg)*).into())
	};
	(warn, $($arg:tt)*) => {
		$crate::__macro_support::web_sys::console::warn_1(&::std::format!($($arg)*).into())
	};
	(error, $($arg:tt)*) => {
		$crate::__macro_support::web_sys::console::error_1(&::std::format!($($arg)*).into())
	};
}

#[doc(hidden)]
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! __form_log {
	(debug, $($arg:tt)*) => {
		$crate::__macro_support::tracing::debug!(target: "project_input_pages", $($arg)*)
	};
	(info, $($arg:tt)*) => {
		$crate::__macro_support::tracing::info!(target: "project_input_pages", $($arg)*)
	};
	(warn, $($arg:tt)*) => {
		$crate::__macro_support::tracing::warn!(target: "project_input_pages", $($arg)*)
	};
	(error, $($arg:tt)*) => {
		$crate::__macro_support::tracing::error!(target: "project_input_pages", $($arg)*)
	};
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! __form_log {
	($level:ident, $($arg:tt)*) => {{
		let _ = ::std::format_args!($($arg)*);
	}};
}

/// Step-by-step detail, e.g. violation counts while gathering input.
#[macro_export]
#[cfg(feature = "debug-hooks")]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__form_log!(debug, $($arg)*);
	}};
}

/// Step-by-step detail (disabled: needs the `debug-hooks` feature).
#[macro_export]
#[cfg(not(feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = ::std::format_args!($($arg)*);
	}};
}

/// Lifecycle milestones such as a completed mount.
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__form_log!(info, $($arg)*);
	}};
}

/// Rejected submissions and other recoverable conditions.
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__form_log!(warn, $($arg)*);
	}};
}

/// Faults the page cannot act on, e.g. a failed `alert()`.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__form_log!(error, $($arg)*);
	}};
}
