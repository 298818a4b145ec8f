//! Regex-backed patterns used by the `pattern` rule

use regex::Regex;

/// A compiled pattern a field value has to satisfy
#[derive(Debug, Clone)]
pub enum Pattern {
    /// The whole value must match.
    Full(Regex),
    /// Every class must occur somewhere in the value, in any order.
    ContainsAll(Vec<Regex>),
}

impl Pattern {
    /// Compile a pattern that has to cover the entire value
    ///
    /// ```
    /// use cadastro_validation::Pattern;
    /// let p = Pattern::full(r"[0-9]{3}").unwrap();
    /// assert!(p.is_match("123"));
    /// assert!(!p.is_match("1234"));
    /// ```
    pub fn full(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern::Full(anchored(source)?))
    }

    /// Compile a set of character classes that must all be present
    pub fn contains_all<'a>(
        classes: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, regex::Error> {
        let compiled = classes
            .into_iter()
            .map(Regex::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pattern::ContainsAll(compiled))
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Full(regex) => regex.is_match(value),
            Pattern::ContainsAll(classes) => classes.iter().all(|class| class.is_match(value)),
        }
    }
}

/// Wrap a pattern so it only matches the complete input
pub fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", source))
}
