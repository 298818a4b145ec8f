//! Password validation functions

use crate::pattern::Pattern;
use once_cell::sync::Lazy;

/// Character classes a password must contain at least once each:
/// lowercase, uppercase, digit
pub const PASSWORD_CLASSES: [&str; 3] = ["[a-z]", "[A-Z]", "[0-9]"];

pub static PASSWORD_PATTERN: Lazy<Pattern> = Lazy::new(|| {
    Pattern::contains_all(PASSWORD_CLASSES).expect("password classes are valid regexes")
});

/// True when the password mixes lowercase, uppercase and digits
pub fn has_required_classes(password: &str) -> bool {
    PASSWORD_PATTERN.is_match(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_password() {
        assert!(has_required_classes("Abcde1"));
        assert!(has_required_classes("1aB"));
        assert!(has_required_classes("!!x--Y__9"));
    }

    #[test]
    fn test_missing_class() {
        assert!(!has_required_classes("abcde1"));
        assert!(!has_required_classes("ABCDE1"));
        assert!(!has_required_classes("Abcdef"));
        assert!(!has_required_classes(""));
    }
}
