// File: src/errors.rs
// Purpose: Per-field validation failures and the error map shown next to inputs

use crate::field::Field;
use serde::Serialize;
use std::collections::BTreeMap;

/// The single failure kind: one field, one message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationFailure {
    pub field: Field,
    pub message: String,
}

impl FieldValidationFailure {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Current error message per field; a missing key means the field shows no error
///
/// Entries are only added by a full validation pass (via `FromIterator`);
/// afterwards they can only be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Remove the entry for `field`, returning the message it had
    pub fn clear_field(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn failures(&self) -> impl Iterator<Item = FieldValidationFailure> + '_ {
        self.iter()
            .map(|(field, message)| FieldValidationFailure::new(field, message))
    }
}

impl FromIterator<FieldValidationFailure> for ErrorMap {
    /// The first failure reported for a field wins
    fn from_iter<I: IntoIterator<Item = FieldValidationFailure>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for failure in iter {
            map.entry(failure.field).or_insert(failure.message);
        }
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ErrorMap {
        [
            FieldValidationFailure::new(Field::Name, "Nome é obrigatório"),
            FieldValidationFailure::new(Field::Phone, "Telefone é obrigatório"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_collect_and_lookup() {
        let errors = sample();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(Field::Name));
        assert_eq!(errors.get(Field::Phone), Some("Telefone é obrigatório"));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_first_failure_per_field_wins() {
        let errors: ErrorMap = [
            FieldValidationFailure::new(Field::Name, "first"),
            FieldValidationFailure::new(Field::Name, "second"),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("first"));
    }

    #[test]
    fn test_clear_field_leaves_others() {
        let mut errors = sample();
        assert_eq!(errors.clear_field(Field::Name).as_deref(), Some("Nome é obrigatório"));
        assert_eq!(errors.clear_field(Field::Name), None);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::Phone));
    }

    #[test]
    fn test_failure_display() {
        let failure = FieldValidationFailure::new(Field::ConfirmPassword, "Senhas devem ser iguais");
        assert_eq!(failure.to_string(), "confirmarSenha: Senhas devem ser iguais");
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nome"], "Nome é obrigatório");
        assert_eq!(json["telefone"], "Telefone é obrigatório");
    }
}
