//! # Cadastro Form
//!
//! Validation engine and state reconciler for the user registration form.
//!
//! - [`FormSchema`] declares the rules for every [`Field`]
//! - [`FormSchema::validate_all`] runs a full pass and returns a [`SubmissionOutcome`]
//! - [`FormState`] applies edit/submit events and tracks the success banner
//! - [`FormController`] owns one form state and schedules the banner timeout
//!
//! ## Example
//!
//! ```rust
//! use cadastro_form::{Field, FormSchema, FormState, SubmissionOutcome};
//!
//! let schema = FormSchema::registration();
//! let state = FormState::default()
//!     .on_field_edit(Field::Name, "Jo")
//!     .on_field_edit(Field::Email, "jo@x.com")
//!     .on_field_edit(Field::Phone, "(11) 98888-7777")
//!     .on_field_edit(Field::Password, "Abcde1")
//!     .on_field_edit(Field::ConfirmPassword, "Abcde1");
//!
//! let (state, outcome) = state.submit(&schema);
//! assert!(matches!(outcome, SubmissionOutcome::Accepted(_)));
//! assert!(state.show_success());
//! ```

pub mod config;
pub mod context;
pub mod controller;
pub mod errors;
pub mod field;
pub mod schema;
pub mod state;
pub mod validator;
pub mod values;

pub use config::Config;
pub use context::FormContext;
pub use controller::FormController;
pub use errors::{ErrorMap, FieldValidationFailure};
pub use field::{Field, UnknownField};
pub use schema::{FieldSchema, FormSchema, MessageOverrides, RuleKind, RuleMessages};
pub use state::{FormEvent, FormPhase, FormState, SuccessTicket};
pub use validator::SubmissionOutcome;
pub use values::{FormValues, Registration};
