//! Email validation functions

use crate::pattern::anchored;
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, dotted domain, alphabetic TLD of two or more letters
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
