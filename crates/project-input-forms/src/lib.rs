//! Validation and value coercion for the project input form
//!
//! This crate holds everything about a submitted form that does not touch
//! the DOM:
//! - [`ValidationRule`]: optional constraints describing one field value
//! - [`validate`] / [`check`]: the lenient and strict rule evaluators
//! - [`coerce_count`]: browser-style number coercion for the people field
//! - [`ParsedSubmission`]: the triple produced by a successful submit
//!
//! ## Example
//!
//! ```
//! use project_input_forms::{ValidationRule, validate};
//!
//! assert!(validate(&ValidationRule::new("Build App").required()));
//! assert!(!validate(&ValidationRule::new("   ").required()));
//! assert!(validate(&ValidationRule::new("")));
//! ```

pub mod coerce;
pub mod rule;
pub mod submission;
pub mod validators;

pub use coerce::{CoercionError, coerce_count};
pub use rule::{RuleValue, ValidationRule};
pub use submission::ParsedSubmission;
pub use validators::{ConstraintMode, RuleViolation, check, validate};
