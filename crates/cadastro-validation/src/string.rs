//! String validation functions

/// True when nothing but whitespace is left after trimming
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Length in characters, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    char_len(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

/// Exact comparison, no trimming or case folding
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
