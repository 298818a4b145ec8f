//! Cadastro Validation
//!
//! Pure predicates over single field values. The form crate decides which
//! predicate applies to which field and in what order; nothing here knows
//! about field names or messages.

pub mod email;
pub mod password;
pub mod pattern;
pub mod phone;
pub mod string;

pub use email::*;
pub use password::*;
pub use pattern::Pattern;
pub use phone::*;
pub use string::*;
