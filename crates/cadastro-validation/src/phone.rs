//! Brazilian mobile phone shape: `(DD) DDDDD-DDDD`

use crate::pattern::anchored;
use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII digits only; `\d` would also accept other Unicode digits
pub const PHONE_PATTERN: &str = r"\([0-9]{2}\) [0-9]{5}-[0-9]{4}";

/// Input mask shown to the user, `0` marks a digit slot
pub const PHONE_MASK: &str = "(00) 00000-0000";

pub static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| anchored(PHONE_PATTERN).expect("phone pattern is a valid regex"));

/// True for a fully formatted phone number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
