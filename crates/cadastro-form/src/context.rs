// File: src/context.rs
// Purpose: Read-only view of a form state for templates and JSON clients

use crate::errors::ErrorMap;
use crate::field::Field;
use crate::state::{FormPhase, FormState};
use crate::values::FormValues;
use serde::Serialize;

/// What a renderer needs: controlled values, inline errors, banner flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormContext {
    pub values: FormValues,
    pub errors: ErrorMap,
    pub show_success: bool,
    pub phase: FormPhase,
}

impl FormContext {
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(field)
    }

    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_value(&self, field: Field) -> &str {
        self.values.get(field)
    }
}

impl From<&FormState> for FormContext {
    fn from(state: &FormState) -> Self {
        Self {
            values: state.values().clone(),
            errors: state.errors().clone(),
            show_success: state.show_success(),
            phase: state.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormSchema;

    #[test]
    fn test_context_from_rejected_state() {
        let state = FormState::new().on_field_edit(Field::Name, "Jo");
        let (state, _) = state.submit(&FormSchema::registration());
        let context = FormContext::from(&state);

        assert!(context.has_errors());
        assert!(!context.has_error(Field::Name));
        assert_eq!(context.get_error(Field::Email), Some("E-mail é obrigatório"));
        assert_eq!(context.get_value(Field::Name), "Jo");
        assert!(!context.show_success);
    }

    #[test]
    fn test_empty_context() {
        let context = FormContext::default();
        assert!(!context.has_errors());
        assert!(context.get_error(Field::Phone).is_none());
        assert_eq!(context.get_value(Field::Phone), "");
    }

    #[test]
    fn test_context_json_shape() {
        let (state, _) = FormState::new().submit(&FormSchema::registration());
        let json = serde_json::to_value(FormContext::from(&state)).unwrap();

        assert_eq!(json["phase"], "rejected");
        assert_eq!(json["show_success"], false);
        assert_eq!(json["errors"]["senha"], "Senha é obrigatória");
        assert_eq!(json["values"]["confirmarSenha"], "");
    }
}
